//! Figure lists loaded from TOML or JSON.
//!
//! ```toml
//! [[figures]]
//! kind = "rectangle"
//! p1 = { x = 1.0, y = 2.0 }
//! p2 = { x = 3.0, y = 4.0 }
//!
//! [[figures]]
//! kind = "circle"
//! center = { x = 5.0, y = 6.0 }
//! radius = 7.0
//! ```

use super::{Circle, Figure, Point, Rectangle};
use crate::{GeometryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FigureSpec {
    Rectangle { p1: Point, p2: Point },
    Circle { center: Point, radius: f64 },
}

impl FigureSpec {
    pub fn into_figure(self) -> Box<dyn Figure> {
        match self {
            FigureSpec::Rectangle { p1, p2 } => Box::new(Rectangle::new(p1, p2)),
            FigureSpec::Circle { center, radius } => {
                if radius < 0.0 {
                    log::warn!("circle at {center} has negative radius {radius}");
                }
                Box::new(Circle::new(center, radius))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub figures: Vec<FigureSpec>,
}

impl Scene {
    /// The fixed sequence shown when no scene file is given.
    pub fn demo() -> Self {
        Self {
            figures: vec![
                FigureSpec::Rectangle {
                    p1: Point::new(1.0, 2.0),
                    p2: Point::new(3.0, 4.0),
                },
                FigureSpec::Circle {
                    center: Point::new(5.0, 6.0),
                    radius: 7.0,
                },
            ],
        }
    }

    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }

    pub fn parse_json(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|err| err.to_string())
    }

    /// Picks the format from the extension. Without one, a leading `{` means
    /// JSON and anything else is read as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| GeometryError::scene(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let scene = match format.as_deref() {
            Some("json") => Self::parse_json(&content),
            Some("toml") => Self::parse_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::parse_json(&content)
                } else {
                    Self::parse_toml(&content)
                }
            }
        }
        .map_err(|message| GeometryError::scene(path, message))?;

        log::info!("loaded {} figure(s) from {}", scene.figures.len(), path.display());
        Ok(scene)
    }

    pub fn into_figures(self) -> Vec<Box<dyn Figure>> {
        self.figures.into_iter().map(FigureSpec::into_figure).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::total_surface;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use std::io::Write;

    const TOML_SCENE: &str = r#"
[[figures]]
kind = "rectangle"
p1 = { x = 0.0, y = 0.0 }
p2 = { x = 3.0, y = 4.0 }

[[figures]]
kind = "circle"
center = { x = 0.0, y = 0.0 }
radius = 2.0
"#;

    #[test]
    fn test_demo_scene() {
        let figures = Scene::demo().into_figures();
        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].describe(), "Rectangle with corners (1, 2) and (3, 4)");
        assert_eq!(figures[1].describe(), "Circle of radius 7 and center (5, 6)");
    }

    #[test]
    fn test_parse_toml() {
        let scene = Scene::parse_toml(TOML_SCENE).unwrap();
        assert_eq!(scene.figures.len(), 2);
        assert_relative_eq!(total_surface(&scene.into_figures()), 12.0 + 4.0 * PI);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"figures": [{"kind": "circle", "center": {"x": 1.0, "y": 1.0}, "radius": 1.0}]}"#;
        let scene = Scene::parse_json(json).unwrap();
        assert_eq!(
            scene.figures,
            vec![FigureSpec::Circle {
                center: Point::new(1.0, 1.0),
                radius: 1.0
            }]
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"figures": [{"kind": "triangle"}]}"#;
        assert!(Scene::parse_json(json).is_err());
    }

    #[test]
    fn test_load_sniffs_format_without_extension() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", TOML_SCENE).unwrap();
        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.figures.len(), 2);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"figures": []}}"#).unwrap();
        let scene = Scene::load(file.path()).unwrap();
        assert!(scene.figures.is_empty());
    }

    #[test]
    fn test_load_sniffs_toml_with_leading_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[meta]\nname = \"demo\"\n{}", TOML_SCENE).unwrap();

        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.figures.len(), 2);
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();

        match Scene::load(file.path()) {
            Err(GeometryError::Scene { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("Expected Scene error, got {other:?}"),
        }
    }
}
