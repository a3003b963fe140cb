//! Text edgelist reading and writing. Operates purely on `&str`/`String`;
//! opening files is the caller's concern.
//!
//! Lines are whitespace- or comma-separated, one edge per line. Lines
//! starting with `#` (after trimming leading whitespace) are comments and
//! skipped; blank lines are skipped too. Both LF and CRLF line endings are
//! accepted since [`str::lines`] strips either uniformly. Line numbers in
//! [`IoError::Malformed`] are 1-indexed and count comment/blank lines, so
//! they match what a text editor would show.
//!
//! Each edge kind gets its own pair of `read_*_edgelist`/`write_*_edgelist`
//! functions rather than one generic entry point: the field layouts differ
//! structurally by kind (a fixed `tail head` pair vs. a variable-length
//! vertex list vs. two semicolon-joined lists), so a single function
//! couldn't return a different concrete edge type per runtime choice
//! anyway.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;
use core::str::FromStr;

use crate::edges::{
    DirectedDelayedTemporalEdge, DirectedDelayedTemporalHyperedge, DirectedEdge,
    DirectedHyperedge, DirectedTemporalEdge, DirectedTemporalHyperedge, UndirectedEdge,
    UndirectedHyperedge, UndirectedTemporalEdge, UndirectedTemporalHyperedge,
};
use crate::error::IoError;
use crate::network::Network;
use crate::traits::{
    edge::{Delayed, NetworkEdge, TemporalEdge},
    incident::Incident,
    time::Time,
    vertex::Vertex,
};

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(idx, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some((idx + 1, trimmed))
        }
    })
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T, IoError> {
    token.parse().map_err(|_| IoError::Malformed {
        line,
        reason: format!("could not parse {what} token {token:?}"),
    })
}

fn parse_vertex_list<V: FromStr>(group: &str, line: usize) -> Result<Vec<V>, IoError> {
    group.split(';').filter(|s| !s.is_empty()).map(|tok| parse_token(tok, line, "vertex")).collect()
}

fn format_vertex_list<V: Display>(verts: &[V]) -> String {
    verts.iter().map(ToString::to_string).collect::<Vec<_>>().join(";")
}

/// Reads an undirected dyadic edgelist (`u v` per line).
pub fn read_undirected_edgelist<V>(text: &str) -> Result<Network<V, UndirectedEdge<V>>, IoError>
where
    V: Vertex + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [u, v] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
        };
        edges.push(UndirectedEdge::new(
            parse_token(u, line, "vertex")?,
            parse_token(v, line, "vertex")?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes an undirected dyadic edgelist, one `u v` line per edge in cause
/// (here, lexicographic) order.
pub fn write_undirected_edgelist<V>(net: &Network<V, UndirectedEdge<V>>) -> String
where
    V: Vertex + Display,
{
    net.edges()
        .map(|e| {
            let verts = e.mutator_verts();
            format!("{} {}\n", verts[0], verts[1])
        })
        .collect()
}

/// Reads a directed dyadic edgelist (`tail head` per line).
pub fn read_directed_edgelist<V>(text: &str) -> Result<Network<V, DirectedEdge<V>>, IoError>
where
    V: Vertex + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [tail, head] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
        };
        edges.push(DirectedEdge::new(
            parse_token(tail, line, "vertex")?,
            parse_token(head, line, "vertex")?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes a directed dyadic edgelist, one `tail head` line per edge in
/// cause order.
pub fn write_directed_edgelist<V>(net: &Network<V, DirectedEdge<V>>) -> String
where
    V: Vertex + Display,
{
    net.edges().map(|e| format!("{} {}\n", e.mutator_verts()[0], e.mutated_verts()[0])).collect()
}

/// Reads an undirected hyperedgelist (`v1 v2 v3 ...`, variable length, per
/// line).
pub fn read_undirected_hyperedgelist<V>(
    text: &str,
) -> Result<Network<V, UndirectedHyperedge<V>>, IoError>
where
    V: Vertex + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        if fields.is_empty() {
            return Err(IoError::Malformed { line, reason: "expected at least 1 field".into() });
        }
        let members = fields
            .into_iter()
            .map(|tok| parse_token(tok, line, "vertex"))
            .collect::<Result<Vec<V>, IoError>>()?;
        edges.push(UndirectedHyperedge::new(members));
    }
    Ok(Network::new(edges))
}

/// Writes an undirected hyperedgelist, one space-separated member line per
/// edge in cause order.
pub fn write_undirected_hyperedgelist<V>(net: &Network<V, UndirectedHyperedge<V>>) -> String
where
    V: Vertex + Display,
{
    net.edges()
        .map(|e| {
            let members: Vec<String> = e.mutator_verts().iter().map(ToString::to_string).collect();
            format!("{}\n", members.join(" "))
        })
        .collect()
}

/// Reads a directed hyperedgelist (`t1;t2;... h1;h2;...` per line, the two
/// groups separated by whitespace).
pub fn read_directed_hyperedgelist<V>(
    text: &str,
) -> Result<Network<V, DirectedHyperedge<V>>, IoError>
where
    V: Vertex + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [tails, heads] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
        };
        edges.push(DirectedHyperedge::new(
            parse_vertex_list(tails, line)?,
            parse_vertex_list(heads, line)?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes a directed hyperedgelist, one `t1;t2;... h1;h2;...` line per edge
/// in cause order.
pub fn write_directed_hyperedgelist<V>(net: &Network<V, DirectedHyperedge<V>>) -> String
where
    V: Vertex + Display,
{
    net.edges()
        .map(|e| {
            format!(
                "{} {}\n",
                format_vertex_list(&e.mutator_verts()),
                format_vertex_list(&e.mutated_verts())
            )
        })
        .collect()
}

/// Reads an undirected temporal edgelist (`u v t` per line).
pub fn read_undirected_temporal_edgelist<V, T>(
    text: &str,
) -> Result<Network<V, UndirectedTemporalEdge<V, T>>, IoError>
where
    V: Vertex + FromStr,
    T: Time + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [u, v, t] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };
        edges.push(UndirectedTemporalEdge::new(
            parse_token(u, line, "vertex")?,
            parse_token(v, line, "vertex")?,
            parse_token(t, line, "time")?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes an undirected temporal edgelist, one `u v t` line per edge in
/// cause order.
pub fn write_undirected_temporal_edgelist<V, T>(
    net: &Network<V, UndirectedTemporalEdge<V, T>>,
) -> String
where
    V: Vertex + Display,
    T: Time + Display,
{
    net.edges()
        .map(|e| {
            let verts = e.mutator_verts();
            format!("{} {} {}\n", verts[0], verts[1], e.cause_time())
        })
        .collect()
}

/// Reads a directed temporal edgelist (`tail head t` per line).
pub fn read_directed_temporal_edgelist<V, T>(
    text: &str,
) -> Result<Network<V, DirectedTemporalEdge<V, T>>, IoError>
where
    V: Vertex + FromStr,
    T: Time + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [tail, head, t] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };
        edges.push(DirectedTemporalEdge::new(
            parse_token(tail, line, "vertex")?,
            parse_token(head, line, "vertex")?,
            parse_token(t, line, "time")?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes a directed temporal edgelist, one `tail head t` line per edge in
/// cause order.
pub fn write_directed_temporal_edgelist<V, T>(
    net: &Network<V, DirectedTemporalEdge<V, T>>,
) -> String
where
    V: Vertex + Display,
    T: Time + Display,
{
    net.edges()
        .map(|e| {
            format!(
                "{} {} {}\n",
                e.mutator_verts()[0],
                e.mutated_verts()[0],
                e.cause_time()
            )
        })
        .collect()
}

/// Reads a directed delayed temporal edgelist (`tail head t_cause delta`
/// per line).
pub fn read_directed_delayed_temporal_edgelist<V, T>(
    text: &str,
) -> Result<Network<V, DirectedDelayedTemporalEdge<V, T>>, IoError>
where
    V: Vertex + FromStr,
    T: Time + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [tail, head, t, delay] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        };
        edges.push(DirectedDelayedTemporalEdge::new(
            parse_token(tail, line, "vertex")?,
            parse_token(head, line, "vertex")?,
            parse_token(t, line, "time")?,
            parse_token(delay, line, "delay")?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes a directed delayed temporal edgelist, one `tail head t_cause
/// delta` line per edge in cause order.
pub fn write_directed_delayed_temporal_edgelist<V, T>(
    net: &Network<V, DirectedDelayedTemporalEdge<V, T>>,
) -> String
where
    V: Vertex + Display,
    T: Time + Display,
{
    net.edges()
        .map(|e| {
            format!(
                "{} {} {} {}\n",
                e.mutator_verts()[0],
                e.mutated_verts()[0],
                e.cause_time(),
                e.delay()
            )
        })
        .collect()
}

/// Reads an undirected temporal hyperedgelist (`v1 v2 v3 ... t`: a
/// variable-length member list followed by the time as the final field).
pub fn read_undirected_temporal_hyperedgelist<V, T>(
    text: &str,
) -> Result<Network<V, UndirectedTemporalHyperedge<V, T>>, IoError>
where
    V: Vertex + FromStr,
    T: Time + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let Some((t, members)) = fields.split_last() else {
            return Err(IoError::Malformed { line, reason: "expected at least 2 fields".into() });
        };
        if members.is_empty() {
            return Err(IoError::Malformed { line, reason: "expected at least 2 fields".into() });
        }
        let members = members
            .iter()
            .map(|tok| parse_token(tok, line, "vertex"))
            .collect::<Result<Vec<V>, IoError>>()?;
        edges.push(UndirectedTemporalHyperedge::new(members, parse_token(t, line, "time")?));
    }
    Ok(Network::new(edges))
}

/// Writes an undirected temporal hyperedgelist, one `v1 v2 ... t` line per
/// edge in cause order.
pub fn write_undirected_temporal_hyperedgelist<V, T>(
    net: &Network<V, UndirectedTemporalHyperedge<V, T>>,
) -> String
where
    V: Vertex + Display,
    T: Time + Display,
{
    net.edges()
        .map(|e| {
            let members: Vec<String> = e.mutator_verts().iter().map(ToString::to_string).collect();
            format!("{} {}\n", members.join(" "), e.cause_time())
        })
        .collect()
}

/// Reads a directed temporal hyperedgelist (`t1;t2;... h1;h2;... t` per
/// line).
pub fn read_directed_temporal_hyperedgelist<V, T>(
    text: &str,
) -> Result<Network<V, DirectedTemporalHyperedge<V, T>>, IoError>
where
    V: Vertex + FromStr,
    T: Time + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [tails, heads, t] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };
        edges.push(DirectedTemporalHyperedge::new(
            parse_vertex_list(tails, line)?,
            parse_vertex_list(heads, line)?,
            parse_token(t, line, "time")?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes a directed temporal hyperedgelist, one `t1;t2;... h1;h2;... t`
/// line per edge in cause order.
pub fn write_directed_temporal_hyperedgelist<V, T>(
    net: &Network<V, DirectedTemporalHyperedge<V, T>>,
) -> String
where
    V: Vertex + Display,
    T: Time + Display,
{
    net.edges()
        .map(|e| {
            format!(
                "{} {} {}\n",
                format_vertex_list(&e.mutator_verts()),
                format_vertex_list(&e.mutated_verts()),
                e.cause_time()
            )
        })
        .collect()
}

/// Reads a directed delayed temporal hyperedgelist (`t1;t2;... h1;h2;...
/// t_cause delta` per line).
pub fn read_directed_delayed_temporal_hyperedgelist<V, T>(
    text: &str,
) -> Result<Network<V, DirectedDelayedTemporalHyperedge<V, T>>, IoError>
where
    V: Vertex + FromStr,
    T: Time + FromStr,
{
    let mut edges = Vec::new();
    for (line, content) in content_lines(text) {
        let fields = split_fields(content);
        let [tails, heads, t, delay] = fields.as_slice() else {
            return Err(IoError::Malformed {
                line,
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        };
        edges.push(DirectedDelayedTemporalHyperedge::new(
            parse_vertex_list(tails, line)?,
            parse_vertex_list(heads, line)?,
            parse_token(t, line, "time")?,
            parse_token(delay, line, "delay")?,
        ));
    }
    Ok(Network::new(edges))
}

/// Writes a directed delayed temporal hyperedgelist, one `t1;t2;...
/// h1;h2;... t_cause delta` line per edge in cause order.
pub fn write_directed_delayed_temporal_hyperedgelist<V, T>(
    net: &Network<V, DirectedDelayedTemporalHyperedge<V, T>>,
) -> String
where
    V: Vertex + Display,
    T: Time + Display,
{
    net.edges()
        .map(|e| {
            format!(
                "{} {} {} {}\n",
                format_vertex_list(&e.mutator_verts()),
                format_vertex_list(&e.mutated_verts()),
                e.cause_time(),
                e.delay()
            )
        })
        .collect()
}
