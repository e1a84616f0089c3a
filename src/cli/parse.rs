//! Value parsers for node and link arguments

use std::fmt;

/// A node named on the command line as `<Kind>-<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub kind: String,
    pub name: String,
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.name)
    }
}

/// A link given as `<Kind>-<name>:<NODE>:<NODE>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    pub kind: String,
    pub name: String,
    pub a: NodeRef,
    pub b: NodeRef,
}

/// Parse `<Kind>-<name>`.
///
/// Only the shape is checked here; kinds are validated against the network.
pub fn parse_node_ref(s: &str) -> std::result::Result<NodeRef, String> {
    let (kind, name) = split_label(s)?;
    Ok(NodeRef { kind, name })
}

/// Parse `<Kind>-<name>:<NODE>:<NODE>`
pub fn parse_link_spec(s: &str) -> std::result::Result<LinkSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [label, a, b] = parts.as_slice() else {
        return Err(format!(
            "expected <Kind>-<name>:<NODE>:<NODE>, got '{}'",
            s
        ));
    };

    let (kind, name) = split_label(label)?;
    Ok(LinkSpec {
        kind,
        name,
        a: parse_node_ref(a)?,
        b: parse_node_ref(b)?,
    })
}

fn split_label(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('-') {
        Some((kind, name)) if !kind.is_empty() && !name.is_empty() => {
            Ok((kind.to_string(), name.to_string()))
        }
        _ => Err(format!("expected <Kind>-<name>, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_ref() {
        let node = parse_node_ref("Mobile-A").unwrap();
        assert_eq!(node.kind, "Mobile");
        assert_eq!(node.name, "A");
        assert_eq!(node.to_string(), "Mobile-A");

        // only the first dash separates kind from name
        assert_eq!(parse_node_ref("PC-left-1").unwrap().name, "left-1");

        assert!(parse_node_ref("PCA").is_err());
        assert!(parse_node_ref("-A").is_err());
        assert!(parse_node_ref("PC-").is_err());
    }

    #[test]
    fn test_parse_link_spec() {
        let link = parse_link_spec("Channel-4:PC-A:PC-C").unwrap();
        assert_eq!(link.kind, "Channel");
        assert_eq!(link.name, "4");
        assert_eq!(link.a.to_string(), "PC-A");
        assert_eq!(link.b.to_string(), "PC-C");

        assert!(parse_link_spec("Channel-4:PC-A").is_err());
        assert!(parse_link_spec("Channel-4:PC-A:PC-B:PC-C").is_err());
        assert!(parse_link_spec("Channel-4:PC-A:PCB").is_err());
    }
}
