use crate::spec::FlagSpec;

use super::naming::field_ident;

/// How a populated field becomes argument-vector entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderShape {
    /// One `--name=value` entry.
    Scalar,
    /// Per element: the flag token, then the element verbatim.
    List,
    /// Per entry: the flag token, then `key=value`. Iteration order is the
    /// map's own and carries no guarantee.
    Map,
}

/// One field of a generated options struct, ready for template rendering.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Sanitized Rust field identifier (e.g. `no_cache`).
    pub name: String,
    /// Flag long name as written on the command line (e.g. `no-cache`).
    pub long: String,
    /// Field type inside the `Option` (e.g. `bool`, `Vec<String>`).
    pub ty: String,
    pub shape: RenderShape,
    /// Help text split into doc-comment lines. Empty when the flag has no
    /// help text.
    pub doc_lines: Vec<String>,
}

/// Map a flag's value-type tag to a field type and rendering shape.
///
/// The tag set is the flag library's: `list` and `map` for repeatable flags,
/// a closed family of primitive tags for scalars. Any unrecognized tag falls
/// back to opaque text, since the wrapped CLI ultimately wants a string on
/// the command line; generation never fails here.
pub fn classify_value_type(tag: &str) -> (&'static str, RenderShape) {
    match tag {
        "list" => ("Vec<String>", RenderShape::List),
        "map" => ("HashMap<String, String>", RenderShape::Map),
        "bool" => ("bool", RenderShape::Scalar),
        "string" => ("String", RenderShape::Scalar),
        "int" | "int64" => ("i64", RenderShape::Scalar),
        "int8" => ("i8", RenderShape::Scalar),
        "int16" => ("i16", RenderShape::Scalar),
        "int32" => ("i32", RenderShape::Scalar),
        "uint" | "uint64" => ("u64", RenderShape::Scalar),
        "uint8" | "byte" => ("u8", RenderShape::Scalar),
        "uint16" => ("u16", RenderShape::Scalar),
        "uint32" => ("u32", RenderShape::Scalar),
        "float32" => ("f32", RenderShape::Scalar),
        "float64" => ("f64", RenderShape::Scalar),
        "rune" => ("char", RenderShape::Scalar),
        _ => ("String", RenderShape::Scalar),
    }
}

/// Whether a tag belongs to the recognized set. Unrecognized tags still
/// generate (as opaque strings); the linter uses this to warn about them.
pub fn is_recognized_tag(tag: &str) -> bool {
    matches!(
        tag,
        "list"
            | "map"
            | "bool"
            | "string"
            | "int"
            | "int8"
            | "int16"
            | "int32"
            | "int64"
            | "uint"
            | "uint8"
            | "uint16"
            | "uint32"
            | "uint64"
            | "byte"
            | "rune"
            | "float32"
            | "float64"
    )
}

/// Build the field definition for one flag.
pub fn flag_to_field(flag: &FlagSpec) -> FieldDef {
    let (ty, shape) = classify_value_type(&flag.value_type);
    let doc_lines = if flag.help.is_empty() {
        vec![]
    } else {
        flag.help.lines().map(str::to_string).collect()
    };
    FieldDef {
        name: field_ident(&flag.long),
        long: flag.long.clone(),
        ty: ty.to_string(),
        shape,
        doc_lines,
    }
}
