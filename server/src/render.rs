//! Page rendering seam.
//!
//! Handlers describe *what* to show as a [`View`] and hand it to a
//! [`Renderer`]. Presentation lives entirely behind that trait.

use larder_core::CatalogItem;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Recipe;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize view data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A page template plus the data it is rendered with.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "template", content = "data")]
pub enum View {
    #[serde(rename = "home")]
    Home { recipes: Vec<Recipe> },

    #[serde(rename = "add")]
    Add,

    #[serde(rename = "edit")]
    Edit { recipe: Option<Recipe> },

    #[serde(rename = "myRecipes")]
    MyRecipes { recipes: Vec<Recipe> },

    #[serde(rename = "search")]
    Search { results: Vec<CatalogItem> },

    /// Raw upstream record from a catalog lookup.
    #[serde(rename = "recipe")]
    RecipeDetail {
        recipe: Option<Value>,
        #[serde(rename = "type")]
        kind: String,
    },
}

impl View {
    pub fn template(&self) -> &'static str {
        match self {
            View::Home { .. } => "home",
            View::Add => "add",
            View::Edit { .. } => "edit",
            View::MyRecipes { .. } => "myRecipes",
            View::Search { .. } => "search",
            View::RecipeDetail { .. } => "recipe",
        }
    }

    /// The view's data without the template tag. `Add` has none.
    pub fn data(&self) -> Result<Value, RenderError> {
        let mut tagged = serde_json::to_value(self)?;
        Ok(tagged
            .get_mut("data")
            .map(Value::take)
            .unwrap_or_else(|| Value::Object(Default::default())))
    }
}

pub trait Renderer: Send + Sync {
    fn render(&self, view: &View) -> Result<String, RenderError>;
}

/// Emits an HTML shell naming the template and carrying the view data as an
/// inline JSON document. `/js/app.js` (served from the static directory)
/// builds the DOM from it.
#[derive(Debug, Clone)]
pub struct ShellRenderer {
    title: String,
}

impl Default for ShellRenderer {
    fn default() -> Self {
        Self::new("Larder")
    }
}

impl ShellRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Renderer for ShellRenderer {
    fn render(&self, view: &View) -> Result<String, RenderError> {
        let template = view.template();
        let data = json_for_script(&serde_json::to_string(&view.data()?)?);

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body data-template="{template}">
<main id="app"></main>
<script id="view-data" type="application/json">{data}</script>
<script src="/js/app.js"></script>
</body>
</html>
"#,
            title = escape_html(&self.title),
        ))
    }
}

/// `<`, `>` and `&` can only occur inside JSON strings, where their `\u`
/// escapes are equivalent. Escaping them keeps `</script>` out of the page.
fn json_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::ItemType;

    fn extract_data(html: &str) -> Value {
        let start = html.find(r#"type="application/json">"#).unwrap() + 24;
        let end = start + html[start..].find("</script>").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_template_names() {
        assert_eq!(View::Add.template(), "add");
        assert_eq!(View::MyRecipes { recipes: vec![] }.template(), "myRecipes");
        assert_eq!(
            View::RecipeDetail {
                recipe: None,
                kind: "drink".to_string()
            }
            .template(),
            "recipe"
        );
    }

    #[test]
    fn test_data_strips_tag() {
        let view = View::RecipeDetail {
            recipe: None,
            kind: "drink".to_string(),
        };
        let data = view.data().unwrap();
        assert!(data["recipe"].is_null());
        assert_eq!(data["type"], "drink");
        assert!(data.get("template").is_none());

        assert_eq!(View::Add.data().unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_shell_embeds_data() {
        let view = View::Search {
            results: vec![CatalogItem {
                id: "1".to_string(),
                name: Some("Mac & Cheese".to_string()),
                image: None,
                category: None,
                kind: ItemType::Meal,
            }],
        };
        let html = ShellRenderer::default().render(&view).unwrap();
        assert!(html.contains(r#"<body data-template="search">"#));
        assert!(html.contains(r#"<script src="/js/app.js">"#));

        let data = extract_data(&html);
        assert_eq!(data["results"][0]["name"], "Mac & Cheese");
        assert_eq!(data["results"][0]["type"], "meal");
    }

    #[test]
    fn test_shell_cannot_be_broken_out_of() {
        let view = View::RecipeDetail {
            recipe: Some(serde_json::json!({"strMeal": "</script><script>alert(1)</script>"})),
            kind: "meal".to_string(),
        };
        let html = ShellRenderer::new("<Larder>").render(&view).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("<title>&lt;Larder&gt;</title>"));
        assert_eq!(
            extract_data(&html)["recipe"]["strMeal"],
            "</script><script>alert(1)</script>"
        );
    }
}
