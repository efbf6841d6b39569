//! Relation graph between olfactive families.
//!
//! Built once with petgraph, then exposed as a plain node/edge description for
//! JSON clients and as Graphviz DOT for renderers that draw it directly.

use std::fmt::Write as _;
use std::sync::LazyLock;

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use serde::Serialize;

use super::families::family_names;

pub const GOURMAND: &str = "Gourmand";
pub const FOUGERE: &str = "Fougère";

const EDGES: &[(&str, &str, Option<&str>)] = &[
    ("Floral", "Oriental", None),
    ("Floral", "Aromatic", None),
    ("Citrus", "Aromatic", None),
    ("Citrus", "Woody", None),
    ("Oriental", "Woody", None),
    ("Oriental", GOURMAND, Some("subfamily")),
    ("Woody", "Aromatic", None),
    ("Aromatic", FOUGERE, Some("classic blend")),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyEdge {
    pub from: &'static str,
    pub to: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyGraph {
    pub name: &'static str,
    pub nodes: Vec<&'static str>,
    pub edges: Vec<FamilyEdge>,
}

impl FamilyGraph {
    /// Left-to-right Graphviz digraph with filled ellipse nodes.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "digraph {} {{", self.name);
        out.push_str("    rankdir=LR;\n");
        out.push_str(
            "    node [shape=ellipse, style=filled, color=\"#f1c40f\", fontname=\"Helvetica\"];\n",
        );
        for node in &self.nodes {
            let _ = writeln!(out, "    {};", quote(node));
        }
        for edge in &self.edges {
            let _ = match edge.label {
                Some(label) => writeln!(
                    out,
                    "    {} -> {} [label={}];",
                    quote(edge.from),
                    quote(edge.to),
                    quote(label)
                ),
                None => writeln!(out, "    {} -> {};", quote(edge.from), quote(edge.to)),
            };
        }
        out.push('}');
        out.push('\n');
        out
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('"', "\\\""))
}

static GRAPH: LazyLock<FamilyGraph> = LazyLock::new(build_graph);

/// The family relation graph. Built on first use, never mutated afterwards.
pub fn family_graph() -> &'static FamilyGraph {
    &GRAPH
}

fn build_graph() -> FamilyGraph {
    let mut dag: DiGraph<&'static str, Option<&'static str>> = DiGraph::new();

    let mut index = std::collections::HashMap::new();
    for name in family_names().chain([GOURMAND, FOUGERE]) {
        index.insert(name, dag.add_node(name));
    }
    for (from, to, label) in EDGES {
        // Every edge endpoint is registered above.
        if let (Some(&a), Some(&b)) = (index.get(from), index.get(to)) {
            dag.add_edge(a, b, *label);
        }
    }

    let nodes = dag.node_indices().map(|i| dag[i]).collect();
    let edges = dag
        .edge_references()
        .map(|e| FamilyEdge {
            from: dag[e.source()],
            to: dag[e.target()],
            label: *e.weight(),
        })
        .collect();

    FamilyGraph {
        name: "OlfactiveFamilies",
        nodes,
        edges,
    }
}
