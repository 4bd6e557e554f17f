use std::{
    fmt::{self, Write},
    io,
};

use crate::compare::Compare;
use crate::node::{Color, NIL};
use crate::raw::RawTree;
use crate::rbtree::Rbtree;

impl<K, V, C> Rbtree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Compare<K>,
{
    /// Render this tree as a [Graphviz][dot] digraph. Every entry is a
    /// node filled with its color; left links are green, right links red
    /// and parent links blue.
    ///
    /// [dot]: https://graphviz.org/doc/info/lang.html
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        match render::<K, V, _, _>(self, &mut out) {
            Ok(()) => out,
            Err(_) => panic!("to_dot(): writing to String failed, call the programmer"),
        }
    }

    /// Same as [`Rbtree::to_dot`], written to `w`.
    pub fn write_dot<W>(&self, w: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        w.write_all(self.to_dot().as_bytes())
    }
}

pub(crate) fn render<K, V, T, W>(tree: &T, out: &mut W) -> fmt::Result
where
    K: fmt::Debug,
    V: fmt::Debug,
    T: RawTree<K, V>,
    W: Write,
{
    writeln!(out, "digraph G {{")?;
    writeln!(out, "  rankdir=TB;")?;
    writeln!(out, "  nodesep=0.5;")?;
    writeln!(out, "  ranksep=0.5;")?;
    writeln!(out, "  node [shape=circle, style=filled];")?;
    writeln!(out, "  labelloc=\"t\";")?;
    writeln!(out, "  label=\"{}\";", tree.name().replace('"', "\\\""))?;

    let nodes = tree.nodes();
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        if node == NIL {
            continue;
        }
        let nref = &nodes[node];
        let (key, value) = nref.as_refs();
        let fill = match nref.color {
            Color::Red => "red",
            Color::Black => "black",
        };
        let label = format!("key:{:?}\\nvalue:{:?}\\nslot:{}", key, value, node);
        writeln!(
            out,
            "  node{} [label=\"{}\", fillcolor={}, fontcolor=white];",
            node,
            label.replace('"', "\\\""),
            fill
        )?;
        if nref.left != NIL {
            writeln!(out, "  node{} -> node{} [color=green, label=\"left\"];", node, nref.left)?;
        }
        if nref.right != NIL {
            writeln!(out, "  node{} -> node{} [color=red, label=\"right\"];", node, nref.right)?;
        }
        if nref.parent != NIL {
            writeln!(out, "  node{} -> node{} [color=blue];", node, nref.parent)?;
        }
        stack.push(nref.right);
        stack.push(nref.left);
    }

    writeln!(out, "}}")
}
