use std::collections::{HashMap, HashSet};

use bst_churn::Tree;
use bst_churn::graphviz::to_dot;
use quickcheck_macros::quickcheck;

#[derive(Default)]
struct Parsed {
    children: HashMap<i32, [Option<i32>; 2]>,
    sources: Vec<i32>,
}

fn unquote(id: &str) -> &str {
    id.trim().trim_matches('"')
}

fn parse(dot: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for line in dot.lines() {
        let Some((from, rest)) = line.trim().split_once(" -> ") else {
            continue;
        };
        let from: i32 = unquote(from).parse().expect("node ids are values");
        if !parsed.sources.contains(&from) {
            parsed.sources.push(from);
        }
        let slots = parsed.children.entry(from).or_default();

        let side = if rest.ends_with("[label=\"L\"];") {
            0
        } else if rest.ends_with("[label=\"R\"];") {
            1
        } else {
            continue;
        };
        let (to, _) = rest.split_once(" [").expect("labelled edge");
        slots[side] = Some(unquote(to).parse().expect("node ids are values"));
    }
    parsed
}

fn pre_order(parsed: &Parsed, node: i32, out: &mut Vec<i32>) {
    out.push(node);
    let [left, right] = parsed.children.get(&node).copied().unwrap_or_default();
    for child in [left, right].into_iter().flatten() {
        pre_order(parsed, child, out);
    }
}

/// Rebuilding a tree by inserting the exported nodes in pre-order gives back the same shape,
/// so exporting it again must give the same description.
#[quickcheck]
fn export_round_trip(xs: Vec<i32>) -> bool {
    let mut seen = HashSet::new();
    let distinct: Vec<i32> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
    let tree: Tree = distinct.iter().copied().collect();
    let dot = to_dot(&tree);
    let parsed = parse(&dot);

    let children: HashSet<i32> = parsed
        .children
        .values()
        .flat_map(|slots| slots.iter().flatten().copied())
        .collect();
    let roots: Vec<i32> = parsed
        .sources
        .iter()
        .copied()
        .filter(|id| !children.contains(id))
        .collect();

    let mut order = Vec::new();
    match roots.as_slice() {
        [] => {
            if !tree.is_empty() {
                return false;
            }
        }
        [root] => pre_order(&parsed, *root, &mut order),
        _ => return false,
    }

    let rebuilt: Tree = order.iter().copied().collect();
    order.len() == tree.len() && rebuilt.iter().eq(tree.iter()) && to_dot(&rebuilt) == dot
}
