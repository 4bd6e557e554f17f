use crate::rbtree::Rbtree;

#[test]
fn test_dot_empty() {
    let index: Rbtree<i64, i64> = Rbtree::new("empty");
    let dot = index.to_dot();
    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.contains("  label=\"empty\";\n"));
    assert!(dot.ends_with("}\n"));
    assert!(!dot.contains("->"));
    assert!(!dot.contains("fillcolor"));
}

#[test]
fn test_dot_nodes_and_edges() {
    let mut index: Rbtree<i64, i64> = Rbtree::new("dot-test");
    index.insert(2, 20); // slot 1, black root
    index.insert(1, 10); // slot 2, red left child
    index.insert(3, 30); // slot 3, red right child

    let dot = index.to_dot();
    let lines: Vec<&str> = dot.lines().collect();
    assert!(lines.contains(
        &"  node1 [label=\"key:2\\nvalue:20\\nslot:1\", fillcolor=black, fontcolor=white];"
    ));
    assert!(lines.contains(
        &"  node2 [label=\"key:1\\nvalue:10\\nslot:2\", fillcolor=red, fontcolor=white];"
    ));
    assert!(lines.contains(&"  node1 -> node2 [color=green, label=\"left\"];"));
    assert!(lines.contains(&"  node1 -> node3 [color=red, label=\"right\"];"));
    assert!(lines.contains(&"  node2 -> node1 [color=blue];"));
    assert!(lines.contains(&"  node3 -> node1 [color=blue];"));
    assert_eq!(dot.matches("fillcolor").count(), 3);
    assert_eq!(dot.matches("color=blue").count(), 2);
}

#[test]
fn test_write_dot() {
    let mut index: Rbtree<&str, i64> = Rbtree::new("say \"hi\"");
    index.insert("a", 1);

    let mut buf: Vec<u8> = vec![];
    index.write_dot(&mut buf).unwrap();
    let dot = String::from_utf8(buf).unwrap();
    assert_eq!(dot, index.to_dot());
    assert!(dot.contains("label=\"say \\\"hi\\\"\";"));
    assert!(dot.contains("key:\\\"a\\\""));
}
