//! Compiled reference patterns for the serialized asset format.
//!
//! The format is line oriented and stable, so references are matched and
//! rewritten as text rather than parsed structurally. The patterns are
//! whitespace and field-order sensitive by construction.

use std::sync::LazyLock;

use regex::Regex;

/// An embedded identifier as it appears in companion metadata files and
/// in serialized scene/prefab references: the `guid:` token followed by
/// one whitespace character and the identifier.
pub static GUID_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"guid:\s(?<guid>[0-9A-Za-z]+)").expect("guid pattern"));

/// A material's shader reference block. Exactly two leading spaces,
/// literal braces, and the `fileID`/`guid`/`type` field order.
pub static SHADER_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"  m_Shader: \{fileID: (?<file>\d+), guid: (?<guid>[0-9A-f-a-f]+), type: (?<type>\d+)\}")
        .expect("shader reference pattern")
});

/// A shader source's display-name declaration: the first
/// `Shader "<name>"` occurrence eventually followed by an opening brace.
pub static SHADER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Shader\s+"(?<name>.*)"[\s\S\r]*?\{"#).expect("shader name pattern"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_ref_captures_alphanumeric_token() {
        let meta = "fileFormatVersion: 2\nguid: 4f2d1a9bc3e84120\n";
        let caps = GUID_REF.captures(meta).unwrap();
        assert_eq!(&caps["guid"], "4f2d1a9bc3e84120");
    }

    #[test]
    fn guid_ref_requires_whitespace_after_colon() {
        assert!(GUID_REF.captures("guid:4f2d1a9b").is_none());
    }

    #[test]
    fn shader_ref_matches_exact_block() {
        let line = "  m_Shader: {fileID: 46, guid: 0000000000000000f000000000000000, type: 0}";
        let caps = SHADER_REF.captures(line).unwrap();
        assert_eq!(&caps["file"], "46");
        assert_eq!(&caps["guid"], "0000000000000000f000000000000000");
        assert_eq!(&caps["type"], "0");
    }

    #[test]
    fn shader_ref_rejects_extra_indentation() {
        let line = "   m_Shader: {fileID: 46, guid: abcdef, type: 0}";
        assert!(SHADER_REF.captures(line).is_none());
    }

    #[test]
    fn shader_ref_rejects_reordered_fields() {
        let line = "  m_Shader: {guid: abcdef, fileID: 46, type: 0}";
        assert!(SHADER_REF.captures(line).is_none());
    }

    #[test]
    fn shader_name_takes_first_declaration() {
        let source = "Shader \"Custom/Water\"\n{\n  SubShader { Shader \"Inner\" }\n}\n";
        let caps = SHADER_NAME.captures(source).unwrap();
        assert_eq!(&caps["name"], "Custom/Water");
    }

    #[test]
    fn shader_name_spans_lines_to_brace() {
        let source = "Shader \"Hidden/Blit\"\n\n\n{\n}";
        let caps = SHADER_NAME.captures(source).unwrap();
        assert_eq!(&caps["name"], "Hidden/Blit");
    }

    #[test]
    fn shader_name_absent_without_brace() {
        assert!(SHADER_NAME.captures("Shader \"Unclosed\"").is_none());
    }
}
