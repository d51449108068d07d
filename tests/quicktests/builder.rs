use bst_tools::{balanced, build, is_valid_bst, recursive, BuildError, Builder};

use std::collections::BTreeSet;

#[quickcheck]
fn built_trees_are_valid(xs: Vec<i8>) -> bool {
    is_valid_bst(&build(&xs))
}

#[quickcheck]
fn iterative_matches_recursive(xs: Vec<i8>) -> bool {
    build(&xs) == recursive::build(&xs)
}

#[quickcheck]
fn built_tree_holds_a_prefix(xs: Vec<i8>) -> bool {
    // Values are consumed strictly in order, so the tree's pre-order is a prefix of the input.
    let tree = build(&xs);
    let preorder: Vec<_> = tree.preorder().copied().collect();

    xs.starts_with(&preorder)
}

#[quickcheck]
fn preorder_round_trip(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let preorder: Vec<_> = tree.preorder().copied().collect();

    build(&preorder) == tree && Builder::new().try_build(&preorder) == Ok(build(&preorder))
}

#[quickcheck]
fn try_build_reports_what_was_left_out(xs: Vec<i8>) -> bool {
    let consumed = build(&xs).len();

    match Builder::new().try_build(&xs) {
        Ok(tree) => consumed == xs.len() && tree == build(&xs),
        Err(BuildError::Truncated { consumed: c, len }) => {
            c == consumed && len == xs.len() && consumed < len
        }
        Err(BuildError::EmptyInterval) => false,
    }
}

#[quickcheck]
fn inorder_feeds_balanced_builder(xs: Vec<i8>) -> bool {
    // Feeding the in-order (sorted) values to the balanced builder keeps the tree valid and
    // holds the same values.
    let tree = build(&xs);
    let sorted: Vec<_> = tree.inorder().copied().collect();
    let rebuilt = balanced::from_sorted(&sorted);

    is_valid_bst(&rebuilt) && rebuilt.inorder().copied().eq(sorted.iter().copied())
}

#[quickcheck]
fn balanced_preorder_rebuilds_every_value(xs: BTreeSet<i8>) -> bool {
    let sorted: Vec<_> = xs.into_iter().collect();
    let balanced = balanced::from_sorted(&sorted);
    let preorder: Vec<_> = balanced.preorder().copied().collect();

    Builder::new().try_build(&preorder) == Ok(balanced)
}

#[quickcheck]
fn bounds_keep_values_inside(xs: Vec<i8>, lower: i8, upper: i8) -> bool {
    let tree = Builder::new()
        .lower_bound(lower)
        .upper_bound(upper)
        .build(&xs);

    is_valid_bst(&tree) && tree.inorder().all(|x| lower < *x && *x < upper)
}
