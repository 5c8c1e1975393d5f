//! # Dot
//!
//! Renders a weighted graph in the [DOT language](https://graphviz.org/) of GraphViz.
//! Nodes are pinned on a circle (`pos` attributes are honoured by `neato -n`), every edge is
//! labelled with its weight, and the edges of a spanning tree can be drawn on top in a
//! highlight color.
//!
//! ```ignore
//! let dot_writer = DotWriter::default();
//! dot_writer.try_write_graph(&graph, Some(&graph.kruskal()), &mut writer)?;
//! ```
//!
//! Highlighted edges are written in addition to the plain ones, so parallel strokes in the
//! rendering mark the tree.
use std::{f64::consts::TAU, fmt::Display};

use super::*;
use crate::algo::MstResult;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Prefix of a node (default: 'u')
    prefix: String,
    /// Radius of the circle nodes are placed on
    radius: f64,
    /// Color of plain edges
    edge_color: DotColor,
    /// Color of highlighted (tree) edges
    highlight: DotColor,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            prefix: "u".to_string(),
            radius: 300.0,
            edge_color: DotColor::Gray,
            highlight: DotColor::Red,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Set the radius of the circle nodes are placed on (`300` by default)
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the color of tree edges (`red` by default)
    pub fn highlight(mut self, color: DotColor) -> Self {
        self.highlight = color;
        self
    }

    /// Writes the opening brackets of the (undirected) graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")?;
        writeln!(
            writer,
            "node[shape=circle, style=filled, color={}]",
            DotColor::SteelBlue
        )
    }

    /// Formats a node depending on `self.prefix`
    fn format_node(&self, u: Node) -> String {
        format!("{}{u}", self.prefix)
    }

    /// Writes all `n` nodes with labels `0..n` placed evenly on a circle
    pub fn write_nodes<W>(&self, writer: &mut W, n: NumNodes) -> Result<()>
    where
        W: Write,
    {
        let step = TAU / n.max(1) as f64;
        for u in 0..n {
            let angle = step * u as f64;
            writeln!(
                writer,
                "{}[label=\"{u}\", pos=\"{:.1},{:.1}!\"];",
                self.format_node(u),
                self.radius * angle.cos(),
                self.radius * angle.sin()
            )?;
        }
        Ok(())
    }

    /// Writes an iterator of weighted edges, each labelled by its weight
    pub fn write_edges<W, I>(
        &self,
        writer: &mut W,
        edges: I,
        color: DotColor,
        width: u8,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = WeightedEdge>,
    {
        for WeightedEdge { u, v, w } in edges {
            writeln!(
                writer,
                "{}--{}[label=\"{w}\", color={color}, penwidth={width}];",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }

    /// Writes the whole graph and, if given, highlights the edges of `tree`
    pub fn try_write_graph<G, W>(
        &self,
        graph: &G,
        tree: Option<&MstResult>,
        mut writer: W,
    ) -> Result<()>
    where
        G: WeightedAdjacencyList,
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, graph.number_of_nodes())?;
        self.write_edges(&mut writer, graph.edges(), self.edge_color, 1)?;
        if let Some(tree) = tree {
            self.write_edges(&mut writer, tree.edges().iter().copied(), self.highlight, 3)?;
        }
        self.finish_graph(&mut writer)
    }

    /// Writes the graph to a file, creating missing parent directories first
    pub fn try_write_graph_file<G, P>(
        &self,
        graph: &G,
        tree: Option<&MstResult>,
        path: P,
    ) -> Result<()>
    where
        G: WeightedAdjacencyList,
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(create_file(path)?);
        self.try_write_graph(graph, tree, &mut writer)?;
        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(create_file(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()
    }
}

impl<G> DotWrite for G
where
    G: WeightedAdjacencyList,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, None, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the SVG color names understood by GraphViz, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    DarkGreen,
    Gray,
    Orange,
    Purple,
    Red,
    SteelBlue,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::MinimumSpanningTree;

    #[test]
    fn renders_nodes_edges_and_tree() {
        let graph = WeightedGraph::from_weighted_edges(3, [(0, 1, 4), (1, 2, -1), (0, 2, 7)]);
        let tree = graph.kruskal();

        let mut buffer = Vec::new();
        DotWriter::new()
            .try_write_graph(&graph, Some(&tree), &mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("graph {\n"));
        assert!(text.ends_with("}\n"));
        assert!(text.contains("u0[label=\"0\", pos=\"300.0,0.0!\"];"));
        assert!(text.contains("u2[label=\"2\""));
        assert!(text.contains("u0--u2[label=\"7\", color=gray, penwidth=1];"));
        assert!(text.contains("u1--u2[label=\"-1\", color=red, penwidth=3];"));
        assert!(!text.contains("u0--u2[label=\"7\", color=red"));
        assert_eq!(text.matches("--").count(), 3 + 2);
    }

    #[test]
    fn prefix_and_defaults() {
        let graph = WeightedGraph::from_weighted_edges(2, [(0, 1, 1)]);

        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("color=red"));

        let mut buffer = Vec::new();
        DotWriter::new()
            .node_prefix("v")
            .highlight(DotColor::Blue)
            .try_write_graph(&graph, Some(&graph.prim()), &mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("v0--v1[label=\"1\", color=blue, penwidth=3];"));
    }

    #[test]
    fn color_names() {
        assert_eq!(DotColor::SteelBlue.to_string(), "steelblue");
        assert_eq!(DotColor::DarkGreen.to_string(), "darkgreen");
    }
}
