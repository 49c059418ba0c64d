//! A small in-memory element tree.
//!
//! Only what the banner needs is modelled: elements with a tag, attributes and
//! ordered children. `class` and `style` live in their attributes as the
//! serialized strings a browser would show (`class="a b"`,
//! `style="opacity: 1"`) and are parsed on every access.
//!
//! Operations on an id that does not name an element are silent no-ops, the
//! same way an empty jQuery selection swallows calls.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    attrs: BTreeMap<String, String>,
}

/// The DOM surface the carousel consumes.
pub trait Document {
    fn by_id(&self, id: &str) -> Option<NodeId>;
    fn tag_name(&self, node_id: NodeId) -> Option<&str>;
    fn is_descendant_of(&self, node_id: NodeId, ancestor: NodeId) -> bool;
    /// Element children of `parent` whose tag matches `tag` (ASCII case-insensitive).
    fn children_with_tag(&self, parent: NodeId, tag: &str) -> Vec<NodeId>;
    /// Position among the element siblings, whatever their tag.
    fn index_among_siblings(&self, node_id: NodeId) -> Option<usize>;
    fn class_add(&mut self, node_id: NodeId, class_name: &str);
    fn class_remove(&mut self, node_id: NodeId, class_name: &str);
    fn style_set(&mut self, node_id: NodeId, prop: &str, value: &str);
}

#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends a new element under `parent`. The first element registered with
    /// a given `id` attribute wins lookups, as in a browser.
    pub fn create_element(&mut self, parent: NodeId, tag_name: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs: BTreeMap<String, String> = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let id = NodeId(self.nodes.len());
        if let Some(id_attr) = attrs.get("id").filter(|v| !v.is_empty()) {
            self.id_index.entry(id_attr.clone()).or_insert(id);
        }
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            node_type: NodeType::Element(Element {
                tag_name: tag_name.to_string(),
                attrs,
            }),
        });
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        id
    }

    fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.nodes.get(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Document => None,
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Document => None,
        }
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(node_id.0)?.parent
    }

    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(node_id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn attr(&self, node_id: NodeId, name: &str) -> Option<&str> {
        self.element(node_id)?.attrs.get(name).map(String::as_str)
    }

    pub fn class_contains(&self, node_id: NodeId, class_name: &str) -> bool {
        self.attr(node_id, "class")
            .map(|classes| class_tokens(classes).any(|name| name == class_name))
            .unwrap_or(false)
    }

    /// Inline style value for `prop`, empty when unset.
    pub fn style_get(&self, node_id: NodeId, prop: &str) -> String {
        parse_style_declarations(self.attr(node_id, "style"))
            .into_iter()
            .find(|(name, _)| name == prop)
            .map(|(_, value)| value)
            .unwrap_or_default()
    }
}

impl Document for Dom {
    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    fn is_descendant_of(&self, node_id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.parent(node_id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    fn children_with_tag(&self, parent: NodeId, tag: &str) -> Vec<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .filter(|child| {
                self.tag_name(*child)
                    .map(|name| name.eq_ignore_ascii_case(tag))
                    .unwrap_or(false)
            })
            .collect()
    }

    fn index_among_siblings(&self, node_id: NodeId) -> Option<usize> {
        self.element(node_id)?;
        let parent = self.parent(node_id)?;
        self.children(parent)
            .iter()
            .filter(|sibling| self.element(**sibling).is_some())
            .position(|sibling| *sibling == node_id)
    }

    fn class_add(&mut self, node_id: NodeId, class_name: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        let mut classes: Vec<String> =
            class_tokens(element.attrs.get("class").map(String::as_str).unwrap_or(""))
                .map(str::to_string)
                .collect();
        if !classes.iter().any(|name| name == class_name) {
            classes.push(class_name.to_string());
        }
        set_class_attr(element, &classes);
    }

    fn class_remove(&mut self, node_id: NodeId, class_name: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        let classes: Vec<String> =
            class_tokens(element.attrs.get("class").map(String::as_str).unwrap_or(""))
                .filter(|name| *name != class_name)
                .map(str::to_string)
                .collect();
        set_class_attr(element, &classes);
    }

    fn style_set(&mut self, node_id: NodeId, prop: &str, value: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        let mut decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        if let Some(pos) = decls.iter().position(|(name, _)| name == prop) {
            if value.is_empty() {
                decls.remove(pos);
            } else {
                decls[pos].1 = value.to_string();
            }
        } else if !value.is_empty() {
            decls.push((prop.to_string(), value.to_string()));
        }

        if decls.is_empty() {
            element.attrs.remove("style");
        } else {
            element
                .attrs
                .insert("style".to_string(), serialize_style_declarations(&decls));
        }
    }
}

fn class_tokens(classes: &str) -> impl Iterator<Item = &str> {
    classes.split_ascii_whitespace()
}

fn set_class_attr(element: &mut Element, classes: &[String]) {
    if classes.is_empty() {
        element.attrs.remove("class");
    } else {
        element.attrs.insert("class".to_string(), classes.join(" "));
    }
}

fn parse_style_declarations(style: Option<&str>) -> Vec<(String, String)> {
    let Some(style) = style else {
        return Vec::new();
    };
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            if name.is_empty() {
                None
            } else {
                Some((name, value.to_string()))
            }
        })
        .collect()
}

fn serialize_style_declarations(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
