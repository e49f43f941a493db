//! Mesa (dining table) model

use serde::{Deserialize, Deserializer, Serialize};

/// Mesa occupancy state
///
/// The wire value is free text; anything that is not `"ocupada"` after
/// trimming and lowercasing (missing, empty, unrecognized) normalizes
/// to `Libre`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MesaEstado {
    #[default]
    Libre,
    Ocupada,
}

impl MesaEstado {
    /// Normalize a raw `estado` value from the server
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("ocupada") => MesaEstado::Ocupada,
            _ => MesaEstado::Libre,
        }
    }

    /// Lowercase wire/state name, used in transition messages
    pub fn as_str(&self) -> &'static str {
        match self {
            MesaEstado::Libre => "libre",
            MesaEstado::Ocupada => "ocupada",
        }
    }

    /// Capitalized label for the status pill
    pub fn label(&self) -> &'static str {
        match self {
            MesaEstado::Libre => "Libre",
            MesaEstado::Ocupada => "Ocupada",
        }
    }

    pub fn is_ocupada(&self) -> bool {
        matches!(self, MesaEstado::Ocupada)
    }
}

impl std::fmt::Display for MesaEstado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mesa record as served by `/mesas.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MesaRecord {
    pub id: i64,
    /// Display number; the server emits it as a JSON number, older
    /// payloads as a string
    #[serde(deserialize_with = "numero_from_any")]
    pub numero: String,
    #[serde(default)]
    pub estado: Option<String>,
}

impl MesaRecord {
    /// Normalized occupancy state (missing/unrecognized -> `Libre`)
    pub fn estado(&self) -> MesaEstado {
        MesaEstado::from_raw(self.estado.as_deref())
    }
}

/// Envelope of the `/mesas.json` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MesasSnapshot {
    #[serde(default)]
    pub mesas: Vec<MesaRecord>,
}

/// Accept the mesa number as either a JSON number or a string
fn numero_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numero {
        Int(i64),
        Text(String),
    }

    Ok(match Numero::deserialize(deserializer)? {
        Numero::Int(n) => n.to_string(),
        Numero::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_normalization() {
        assert_eq!(MesaEstado::from_raw(Some("ocupada")), MesaEstado::Ocupada);
        assert_eq!(MesaEstado::from_raw(Some("OCUPADA")), MesaEstado::Ocupada);
        assert_eq!(MesaEstado::from_raw(Some(" ocupada ")), MesaEstado::Ocupada);
        assert_eq!(MesaEstado::from_raw(Some("libre")), MesaEstado::Libre);
        assert_eq!(MesaEstado::from_raw(Some("reservada")), MesaEstado::Libre);
        assert_eq!(MesaEstado::from_raw(Some("")), MesaEstado::Libre);
        assert_eq!(MesaEstado::from_raw(None), MesaEstado::Libre);
    }

    #[test]
    fn test_missing_estado_equals_libre() {
        let json = r#"{"mesas":[{"id":1,"numero":5}]}"#;
        let snapshot: MesasSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.mesas[0].estado(), MesaEstado::Libre);
    }

    #[test]
    fn test_numero_accepts_number_and_string() {
        let as_number: MesaRecord =
            serde_json::from_str(r#"{"id":1,"numero":5,"estado":"ocupada"}"#).unwrap();
        assert_eq!(as_number.numero, "5");

        let as_string: MesaRecord =
            serde_json::from_str(r#"{"id":1,"numero":"5","estado":"ocupada"}"#).unwrap();
        assert_eq!(as_string.numero, "5");
    }

    #[test]
    fn test_empty_snapshot_default() {
        let snapshot: MesasSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.mesas.is_empty());
    }
}
