use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use stmatch::*;

const ALPHABET: [char; 4] = ['a', 'b', 'c', 'd'];
const CORPUS: usize = 10_000;

lazy_static! {
    static ref QUERIES: Vec<(&'static str, Pattern<char>)> = vec![
        (
            "a then rest",
            [Token::Leaf('a'), Token::Subtree].into_iter().collect(),
        ),
        (
            "a gap d",
            [Token::Leaf('a'), Token::Subtree, Token::Leaf('d')]
                .into_iter()
                .collect(),
        ),
        ("anything", [Token::Subtree].into_iter().collect()),
        ("exactly ab", "ab".chars().map(Token::Leaf).collect()),
    ];
}

fn random_tree(rng: &mut impl Rng, depth: usize) -> Tree<char> {
    let mut tree = Tree::new(*ALPHABET.choose(rng).unwrap());
    if depth > 0 && rng.gen_bool(0.7) {
        for _ in 0..rng.gen_range(1..=3) {
            tree.add_child(random_tree(rng, depth - 1));
        }
    }
    tree
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut rng = rand::thread_rng();
    let corpus: Vec<Tree<char>> = (0..CORPUS).map(|_| random_tree(&mut rng, 4)).collect();
    let nodes: usize = corpus.iter().map(|tree| tree.size()).sum();
    println!("scanning {} trees ({} nodes)", corpus.len(), nodes);

    // Matching never mutates, so the whole corpus is scanned in parallel
    for (name, query) in QUERIES.iter() {
        let hits = corpus
            .par_iter()
            .filter(|tree| query.is_match(tree))
            .count();
        println!("{:>12}: {:>5} / {}", name, hits, corpus.len());
    }
}
