//! A sideways tree printer built only on the public read accessors. The right
//! subtree is drawn above its parent and the left subtree below, with `⦿`
//! marking an absent child.

use std::fmt::{Display, Write};

use rbtree::{Node, Tree};

#[derive(Copy, Clone, PartialEq)]
enum Side {
    Root,
    Left,
    Right,
}

fn render<K: Display>(tree: &Tree<K>) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        render_node(&mut out, root, Side::Root, 0, &[]);
    }
    out
}

/// `pipes[i]` says whether column `i` carries a vertical connector.
fn render_node<K: Display>(
    out: &mut String,
    node: &Node<K>,
    side: Side,
    level: usize,
    pipes: &[bool],
) {
    let width = level + 1;

    let mut closed = pipes.to_vec();
    if let Some(pipe) = closed.get_mut(level) {
        *pipe = false;
    }
    let above = if side == Side::Right { &closed[..] } else { pipes };
    let below = if side == Side::Left { &closed[..] } else { pipes };

    match node.right() {
        Some(right) => {
            let pipes = with_pipe(above, level + 1);
            render_node(out, right, Side::Right, level + 1, &pipes)
        }
        None => writeln!(out, "{}┌⦿", prefix(above, width)).unwrap(),
    }

    let marker = match side {
        Side::Root => "╴",
        Side::Left => "└",
        Side::Right => "┌",
    };
    writeln!(out, "{}{}{}", prefix(pipes, width - 1), marker, node.key()).unwrap();

    match node.left() {
        Some(left) => {
            let pipes = with_pipe(below, level + 1);
            render_node(out, left, Side::Left, level + 1, &pipes)
        }
        None => writeln!(out, "{}└⦿", prefix(below, width)).unwrap(),
    }
}

fn with_pipe(pipes: &[bool], column: usize) -> Vec<bool> {
    let mut pipes = pipes.to_vec();
    if pipes.len() <= column {
        pipes.resize(column + 1, false);
    }
    pipes[column] = true;
    pipes
}

fn prefix(pipes: &[bool], width: usize) -> String {
    (0..width)
        .map(|i| match pipes.get(i) {
            Some(true) => '│',
            _ => ' ',
        })
        .collect()
}

fn build(keys: &[i32]) -> Tree<i32> {
    keys.iter().fold(Tree::new(), |tree, key| tree.insert(*key).0)
}

#[test]
fn test_render_empty() {
    assert_eq!(render(&Tree::<i32>::new()), "");
}

#[test]
fn test_render_single() {
    assert_eq!(render(&build(&[1])), " ┌⦿\n╴1\n └⦿\n");
}

#[test]
fn test_render_with_right_spine() {
    let expected = [
        "   ┌⦿",
        "  ┌5",
        "  ││┌⦿",
        "  │└4",
        "  │ └⦿",
        " ┌3",
        " │└⦿",
        "╴2",
        " │┌⦿",
        " └1",
        "  └⦿",
    ];

    let rendered = render(&build(&[2, 3, 1, 5, 4]));
    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_render_with_left_spine() {
    let expected = [
        " ┌⦿",
        "╴8",
        " │   ┌⦿",
        " │  ┌7",
        " │  │└⦿",
        " │ ┌5",
        " │ ││┌⦿",
        " │ │└4",
        " │ │ └⦿",
        " │┌3",
        " ││└⦿",
        " └2",
        "  │┌⦿",
        "  └1",
        "   └⦿",
    ];

    let rendered = render(&build(&[8, 2, 3, 1, 5, 4, 7]));
    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_render_after_rotation() {
    let expected = [
        "  ┌⦿",
        " ┌7",
        " │└⦿",
        "╴5",
        " │ ┌⦿",
        " │┌4",
        " ││└⦿",
        " └3",
        "  │┌⦿",
        "  └2",
        "   └⦿",
    ];

    let rendered = render(&build(&[3, 2, 5, 4, 7]).rotate_left());
    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
}
