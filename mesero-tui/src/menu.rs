//! Menu file loading
//!
//! The menu file stands in for the server-rendered order form: a JSON
//! array of `{id, nombre, precio}` entries.

use anyhow::Context;
use shared::models::MenuEntry;
use std::path::Path;

pub fn parse_menu(raw: &str) -> anyhow::Result<Vec<MenuEntry>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_menu(path: &Path) -> anyhow::Result<Vec<MenuEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("No se pudo leer el menú en {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Menú inválido en {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu() {
        let entries = parse_menu(
            r#"[
                {"id": 1, "nombre": "Bandeja paisa", "precio": 28000},
                {"id": 2, "precio": 6500},
                {"id": 3, "nombre": "Arepa"}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[1].nombre.is_none());
        assert_eq!(entries[2].precio, 0.0);
    }

    #[test]
    fn test_invalid_menu_is_an_error() {
        assert!(parse_menu("{not json").is_err());
        assert!(load_menu(Path::new("/no/such/menu.json")).is_err());
    }
}
