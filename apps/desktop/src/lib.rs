use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use regform::domain::config::WindowConfig;

pub mod components;
pub mod logging;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl DesktopApp {
    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, root: fn() -> Element) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        tracing::info!(title = %self.title, "Registration form initialized");

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_geometry_comes_from_config() {
        let window = WindowConfig { title: "Sign up".to_owned(), width: 480.0, height: 720.0 };

        let app = DesktopApp::from_config(&window);

        assert_eq!(app.title, "Sign up");
        assert!((app.width - 480.0).abs() < f64::EPSILON);
        assert!((app.height - 720.0).abs() < f64::EPSILON);
    }
}
