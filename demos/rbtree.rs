use rb_tree::data_gen::generate_uniform;
use rb_tree::utils::max_height;
use rb_tree::{DuplicatePolicy, Key, RedBlackTree, TreeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> rb_tree::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tree = RedBlackTree::new();
    tree.pretty_print();

    // straight line, then zig-zag
    for keys in [&[10, 20, 30][..], &[10, 20, 15][..]] {
        let tree = RedBlackTree::new_with_keys(keys);
        println!("keys: {:?}", keys);
        tree.pretty_print();
    }

    // would be a linked list without rebalancing
    let keys: Vec<Key> = (1..=50).rev().collect();
    let tree = RedBlackTree::new_with_keys(&keys);
    println!(
        "descending 50: height {} (bound {}), black height {}",
        tree.height(),
        max_height(tree.len()),
        tree.validate()?
    );

    let config = TreeConfig::new().duplicates(DuplicatePolicy::Ignore);
    let mut set = RedBlackTree::with_config(config);
    set.extend(generate_uniform(30, -20, 20));
    println!("random set of {} keys: {:?}", set.len(), set.values());
    set.pretty_print();
    set.validate()?;

    Ok(())
}
