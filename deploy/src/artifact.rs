//! Contract Artifact Loading
//!
//! Accepts a compiler artifact (`{"bytecode": "0x..."}`, or foundry's
//! `{"bytecode": {"object": "0x..."}}`) or a file holding the raw hex.

use std::path::Path;

use serde_json::Value;

use crate::error::DeployError;

pub fn load_bytecode(path: &Path) -> Result<String, DeployError> {
    let contents = std::fs::read_to_string(path)?;
    parse_bytecode(&contents)
}

/// Creation bytecode as `0x`-prefixed hex
pub fn parse_bytecode(contents: &str) -> Result<String, DeployError> {
    let raw = match serde_json::from_str::<Value>(contents) {
        Ok(json @ Value::Object(_)) => bytecode_field(&json)?,
        _ => contents.trim().to_string(),
    };
    normalize_hex(&raw)
}

fn bytecode_field(json: &Value) -> Result<String, DeployError> {
    let field = json
        .get("bytecode")
        .ok_or_else(|| DeployError::Artifact("missing \"bytecode\" field".to_string()))?;
    let code = match field {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => obj.get("object").and_then(Value::as_str),
        _ => None,
    };
    code.map(str::to_string)
        .ok_or_else(|| DeployError::Artifact("\"bytecode\" is not a hex string".to_string()))
}

fn normalize_hex(raw: &str) -> Result<String, DeployError> {
    let digits = raw.trim().trim_start_matches("0x");
    if digits.is_empty() {
        return Err(DeployError::Artifact("bytecode is empty".to_string()));
    }
    if digits.len() % 2 != 0 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DeployError::Artifact("bytecode is not valid hex".to_string()));
    }
    Ok(format!("0x{}", digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_hardhat_artifact() {
        let json = r#"{"contractName":"VotingSystem","abi":[],"bytecode":"0x6080604052"}"#;
        assert_eq!(parse_bytecode(json).unwrap(), "0x6080604052");
    }

    #[test]
    fn test_foundry_artifact() {
        let json = r#"{"abi":[],"bytecode":{"object":"0x6080","linkReferences":{}}}"#;
        assert_eq!(parse_bytecode(json).unwrap(), "0x6080");
    }

    #[test]
    fn test_raw_hex_file() {
        assert_eq!(parse_bytecode("6080604052\n").unwrap(), "0x6080604052");
    }

    #[test]
    fn test_rejects_bad_bytecode() {
        assert!(matches!(parse_bytecode(r#"{"abi":[]}"#), Err(DeployError::Artifact(_))));
        assert!(matches!(parse_bytecode(r#"{"bytecode":"0x"}"#), Err(DeployError::Artifact(_))));
        assert!(matches!(parse_bytecode("0x60zz"), Err(DeployError::Artifact(_))));
        assert!(matches!(parse_bytecode("0x608"), Err(DeployError::Artifact(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"bytecode":"0xdeadbeef"}}"#).unwrap();
        assert_eq!(load_bytecode(file.path()).unwrap(), "0xdeadbeef");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_bytecode(&dir.path().join("VotingSystem.json"));
        assert!(matches!(result, Err(DeployError::Io(_))));
    }
}
