//! # Json
//!
//! Graph sets are read from a document `{"graphs": [ ... ]}`. Each graph may carry an
//! integer `id` and is given in one of two shapes:
//!
//! - **Indexed**: `{"num_vertices": 4, "edges": [{"u": 0, "v": 1, "w": 3}, ...]}`.
//!   The weight is read from `w`, then `weight`, and defaults to `1`.
//!   Edges with a missing or negative endpoint are skipped. Integers may also be written
//!   as integral floats (`3.0`) or numeric strings (`"3"`).
//! - **Named**: `{"nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 3}, ...]}`.
//!   Node `i` is the `i`-th name. The weight is read from `weight`, then `w`, and defaults
//!   to `1`. Edges referring to unknown names are skipped. Names may also be numbers, so
//!   `"nodes": [1, 2]` with `"from": 1` is read as well.
//!
//! The shape is chosen by the keys present (`num_vertices` first, then `nodes`); a graph
//! with neither is rejected. Type errors inside a shape are reported as they are.
//!
//! Graphs without `id` (or with a negative one) are numbered by their position, starting at `1`.

use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

use fxhash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use tracing::trace;

use super::*;

/// A graph together with the identifier it is reported under
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledGraph {
    pub id: i64,
    pub graph: WeightedGraph,
}

/// Reader for Json graph sets
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSetReader {
    /// If *true*, edges with an endpoint `>= n` are skipped instead of rejected
    skip_out_of_range: bool,
}

impl GraphSetReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates how edges with an endpoint `>= n` in the indexed shape are handled
    pub fn skip_out_of_range(mut self, skip: bool) -> Self {
        self.skip_out_of_range = skip;
        self
    }

    /// Reads all graphs of a graph set document.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::InvalidData`] if the document is not valid Json,
    /// a graph matches neither shape, has a negative number of vertices or (unless skipped)
    /// an edge leaving the vertex range.
    pub fn try_read<R: Read>(&self, reader: R) -> Result<Vec<LabelledGraph>> {
        let document: GraphSetDocument = serde_json::from_reader(reader)
            .map_err(|e| io_error!(ErrorKind::InvalidData, e))?;

        document
            .graphs
            .into_iter()
            .enumerate()
            .map(|(pos, value)| self.try_read_graph(pos, value))
            .collect()
    }

    /// Reads all graphs of a graph set document stored in a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if [`GraphSetReader::try_read`] fails.
    pub fn try_read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<LabelledGraph>> {
        self.try_read(BufReader::new(File::open(path)?))
    }

    fn try_read_graph(&self, pos: usize, value: Value) -> Result<LabelledGraph> {
        let id = value
            .get("id")
            .and_then(integral)
            .filter(|id| *id >= 0)
            .unwrap_or(pos as i64 + 1);

        let invalid =
            |e: serde_json::Error| io_error!(ErrorKind::InvalidData, format!("Graph {id}: {e}"));

        // the shape is decided by the keys present, `num_vertices` taking precedence
        let graph = if value.get("num_vertices").is_some() {
            let IndexedGraph {
                num_vertices,
                edges,
            } = serde_json::from_value(value).map_err(invalid)?;
            self.build_indexed(id, num_vertices, edges.unwrap_or_default())?
        } else if value.get("nodes").is_some() {
            let NamedGraph { nodes, edges } = serde_json::from_value(value).map_err(invalid)?;
            Self::build_named(nodes, edges.unwrap_or_default())
        } else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!(
                    "Unknown format of graph {id}: expected {{num_vertices, edges}} or {{nodes, edges}}"
                )
            ));
        };

        trace!(
            id,
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            "read graph"
        );
        Ok(LabelledGraph { id, graph })
    }

    fn build_indexed(
        &self,
        id: i64,
        num_vertices: i64,
        edges: Vec<IndexedEdge>,
    ) -> Result<WeightedGraph> {
        let mut graph =
            WeightedGraph::try_new(num_vertices).map_err(|e| io_error!(ErrorKind::InvalidData, e))?;
        let n = graph.number_of_nodes() as i64;

        for edge in edges {
            let (Some(u), Some(v)) = (edge.u, edge.v) else {
                continue;
            };
            if u < 0 || v < 0 {
                continue;
            }

            if u >= n || v >= n {
                raise_error_unless!(
                    self.skip_out_of_range,
                    ErrorKind::InvalidData,
                    format!("Edge ({u},{v}) of graph {id} leaves the vertex range 0..{n}")
                );
                continue;
            }

            graph.add_edge(u as Node, v as Node, edge.w.or(edge.weight).unwrap_or(1));
        }

        Ok(graph)
    }

    fn build_named(nodes: Vec<String>, edges: Vec<NamedEdge>) -> WeightedGraph {
        let mut graph = WeightedGraph::new(nodes.len() as NumNodes);
        let index: FxHashMap<String, Node> = nodes
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name, i as Node))
            .collect();

        for edge in edges {
            let endpoints = edge
                .from
                .as_ref()
                .and_then(|name| index.get(name))
                .zip(edge.to.as_ref().and_then(|name| index.get(name)));

            if let Some((&u, &v)) = endpoints {
                graph.add_edge(u, v, edge.weight.or(edge.w).unwrap_or(1));
            }
        }

        graph
    }
}

/// Writes graph sets in the indexed shape, eg. for generated benchmark inputs
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSetWriter;

impl GraphSetWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the graphs as a pretty-printed Json document
    pub fn try_write<W: Write>(&self, graphs: &[LabelledGraph], writer: W) -> Result<()> {
        let document = IndexedDocument {
            graphs: graphs
                .iter()
                .map(|lg| IndexedOut {
                    id: lg.id,
                    num_vertices: lg.graph.number_of_nodes(),
                    edges: lg.graph.edge_list(),
                })
                .collect(),
        };

        serde_json::to_writer_pretty(writer, &document).map_err(std::io::Error::from)
    }

    /// Writes the graphs to a file, creating missing parent directories first
    pub fn try_write_file<P>(&self, graphs: &[LabelledGraph], path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(create_file(path)?);
        self.try_write(graphs, &mut writer)?;
        writer.flush()
    }
}

/// Writes the reports as `{"results": [...]}`, pretty-printed
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportWriter;

impl JsonReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for JsonReportWriter {
    fn try_write_reports<W: Write>(&self, reports: &[GraphReport], writer: W) -> Result<()> {
        #[derive(Serialize)]
        struct ResultsDocument<'a> {
            results: &'a [GraphReport],
        }

        serde_json::to_writer_pretty(writer, &ResultsDocument { results: reports })
            .map_err(std::io::Error::from)
    }
}

#[derive(Deserialize)]
struct GraphSetDocument {
    graphs: Vec<Value>,
}

#[derive(Deserialize)]
struct IndexedGraph {
    #[serde(deserialize_with = "integer")]
    num_vertices: i64,
    #[serde(default)]
    edges: Option<Vec<IndexedEdge>>,
}

#[derive(Deserialize)]
struct NamedGraph {
    #[serde(deserialize_with = "names")]
    nodes: Vec<String>,
    #[serde(default)]
    edges: Option<Vec<NamedEdge>>,
}

#[derive(Deserialize)]
struct IndexedEdge {
    #[serde(default, deserialize_with = "optional_integer")]
    u: Option<i64>,
    #[serde(default, deserialize_with = "optional_integer")]
    v: Option<i64>,
    #[serde(default, deserialize_with = "optional_integer")]
    w: Option<Weight>,
    #[serde(default, deserialize_with = "optional_integer")]
    weight: Option<Weight>,
}

#[derive(Deserialize)]
struct NamedEdge {
    #[serde(default, deserialize_with = "optional_name")]
    from: Option<String>,
    #[serde(default, deserialize_with = "optional_name")]
    to: Option<String>,
    #[serde(default, deserialize_with = "optional_integer")]
    weight: Option<Weight>,
    #[serde(default, deserialize_with = "optional_integer")]
    w: Option<Weight>,
}

/// Integers may also be given as integral floats (`3.0`) or numeric strings (`"3"`)
fn integral(value: &Value) -> Option<i64> {
    match value {
        Value::Number(x) => x.as_i64().or_else(|| {
            x.as_f64()
                .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(f))
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Node names may be strings, numbers or booleans; `1` and `"1"` denote the same node
fn name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(x) => Some(x.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn integer<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    integral(&value).ok_or_else(|| D::Error::custom(format!("expected an integer, found {value}")))
}

fn optional_integer<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)?
        .map(|value| {
            integral(&value)
                .ok_or_else(|| D::Error::custom(format!("expected an integer, found {value}")))
        })
        .transpose()
}

fn names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .iter()
        .map(|value| {
            name(value).ok_or_else(|| D::Error::custom(format!("expected a node name, found {value}")))
        })
        .collect()
}

fn optional_name<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)?
        .map(|value| {
            name(&value).ok_or_else(|| D::Error::custom(format!("expected a node name, found {value}")))
        })
        .transpose()
}

#[derive(Serialize)]
struct IndexedDocument<'a> {
    graphs: Vec<IndexedOut<'a>>,
}

#[derive(Serialize)]
struct IndexedOut<'a> {
    id: i64,
    num_vertices: NumNodes,
    edges: &'a [WeightedEdge],
}
