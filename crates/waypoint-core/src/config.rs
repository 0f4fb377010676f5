//! Graph definitions stored as TOML
//!
//! ```toml
//! kind = "undirected"
//! nodes = ["Island"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 4
//!
//! [[edges]]
//! from = "B"
//! to = "C"
//! kind = "directed"
//! ```
//!
//! `kind` sets the default for every edge and may be overridden per edge.
//! Omitted weights default to 1.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypointError};
use crate::graph::{EdgeKind, Graph, Weight};

/// A graph definition as read from a TOML document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Default kind for edges that do not set one
    #[serde(default)]
    pub kind: EdgeKind,

    /// Nodes to add even when no edge mentions them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

/// One `[[edges]]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,

    #[serde(default = "default_weight")]
    pub weight: Weight,

    /// Overrides the document-level `kind`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EdgeKind>,
}

fn default_weight() -> Weight {
    Weight::DEFAULT
}

impl GraphConfig {
    /// Parse and validate a TOML graph definition
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a graph definition from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading graph definition");
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| WaypointError::failed("serialize graph", e))
    }

    /// Save the definition to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Reject weights that cannot be summed into a path cost.
    ///
    /// Negative weights are accepted here; shortest-path search refuses
    /// them on its own.
    pub fn validate(&self) -> Result<()> {
        for edge in &self.edges {
            if !edge.weight.value().is_finite() {
                return Err(WaypointError::InvalidGraph {
                    reason: format!(
                        "edge {} -> {} has non-finite weight {}",
                        edge.from, edge.to, edge.weight
                    ),
                });
            }
            if edge.from.is_empty() || edge.to.is_empty() {
                return Err(WaypointError::InvalidGraph {
                    reason: "edge endpoints must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build the graph: listed nodes first, then edges in document order.
    pub fn build_graph(&self) -> Graph<String> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for edge in &self.edges {
            graph.add_edge(
                edge.from.clone(),
                edge.to.clone(),
                edge.weight,
                edge.kind.unwrap_or(self.kind),
            );
        }
        graph
    }
}
