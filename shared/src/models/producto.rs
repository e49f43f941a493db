//! Producto (menu item) model

use serde::{Deserialize, Serialize};

/// One entry of the menu file handed to the panel
///
/// Stands in for a rendered row of the order form: the server is the
/// authority on products, the panel only reads what it is given.
/// Missing fields degrade instead of failing: no price reads as 0, no
/// name falls back to a placeholder at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: i64,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub precio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let entry: MenuEntry = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(entry.precio, 0.0);
        assert!(entry.nombre.is_none());
    }

    #[test]
    fn test_full_entry() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"id":1,"nombre":"Bandeja paisa","precio":28000}"#).unwrap();
        assert_eq!(entry.nombre.as_deref(), Some("Bandeja paisa"));
        assert_eq!(entry.precio, 28000.0);
    }
}
