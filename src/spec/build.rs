use super::types::{CommandMeta, CommandNode};

/// Flatten a command tree into one [`CommandMeta`] per node, pre-order
/// depth-first: the root first, then each child's full subtree before the
/// next sibling. The emitted generated code follows this order, so repeated
/// runs over the same tree are byte-identical.
pub fn build_commands(root: &CommandNode) -> Vec<CommandMeta> {
    let mut commands = Vec::new();
    flatten(root, &[], &mut commands);
    commands
}

fn flatten(node: &CommandNode, parents: &[String], out: &mut Vec<CommandMeta>) {
    let mut path = parents.to_vec();
    path.push(node.name.clone());
    out.push(CommandMeta {
        path: path.clone(),
        usage: node.usage.clone(),
        short: node.short.clone(),
        flags: node.flags.clone(),
    });
    for child in &node.children {
        flatten(child, &path, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, children: Vec<CommandNode>) -> CommandNode {
        CommandNode {
            name: name.to_string(),
            usage: String::new(),
            short: String::new(),
            flags: vec![],
            children,
        }
    }

    #[test]
    fn test_build_commands_preorder() {
        let root = node(
            "docker",
            vec![
                node("container", vec![node("run", vec![]), node("stop", vec![])]),
                node("version", vec![]),
            ],
        );
        let commands = build_commands(&root);
        let paths: Vec<String> = commands.iter().map(|c| c.display_path()).collect();
        assert_eq!(
            paths,
            vec![
                "docker",
                "docker container",
                "docker container run",
                "docker container stop",
                "docker version",
            ]
        );
    }

    #[test]
    fn test_subcommand_prefix() {
        let root = node("docker", vec![node("build", vec![])]);
        let commands = build_commands(&root);
        assert!(commands[0].subcommand_prefix().is_empty());
        assert_eq!(commands[1].subcommand_prefix(), ["build".to_string()]);
    }
}
