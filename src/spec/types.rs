use serde::Deserialize;

/// One node of the wrapped CLI's subcommand tree.
///
/// Deserialized once from the metadata file before generation begins and
/// never mutated afterwards. Flag and child ordering is declaration order
/// from the metadata file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommandNode {
    /// Command name as it appears on the command line (e.g. `run`).
    pub name: String,
    /// One-line usage synopsis (e.g. `docker build [OPTIONS] PATH | URL | -`).
    #[serde(default)]
    pub usage: String,
    /// Short description shown in the generated doc comment.
    #[serde(default)]
    pub short: String,
    /// Declared flags, in declaration order.
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
    /// Subcommands, in declaration order.
    #[serde(default)]
    pub children: Vec<CommandNode>,
}

/// Metadata for one flag declared on a [`CommandNode`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FlagSpec {
    /// Long flag name, kebab-case, without the `--` prefix (e.g. `no-cache`).
    pub long: String,
    /// Value-type tag (`bool`, `string`, `int64`, `list`, `map`, ...).
    /// Unknown tags are legal and render as opaque text.
    #[serde(rename = "type")]
    pub value_type: String,
    /// Help text, copied verbatim into the generated field's doc comment.
    /// May span multiple lines.
    #[serde(default)]
    pub help: String,
}

/// Flattened view of one command node: the root-to-node name path plus the
/// node's own metadata. This is the generator's sole input shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMeta {
    /// Name path from the root (`["docker", "container", "run"]`). The first
    /// element is the program name; the rendered argument vector starts with
    /// every element after it.
    pub path: Vec<String>,
    pub usage: String,
    pub short: String,
    pub flags: Vec<FlagSpec>,
}

impl CommandMeta {
    /// The path joined with spaces, e.g. `docker container run`. Used in
    /// generated doc comments and lint locations.
    pub fn display_path(&self) -> String {
        self.path.join(" ")
    }

    /// Literal argument-vector prefix: every path element except the program
    /// name. Empty for the root node.
    pub fn subcommand_prefix(&self) -> &[String] {
        &self.path[1..]
    }
}
