use std::process;

use log::{error, info};
use structopt::StructOpt;

use online_suffix_tree::{SuffixTree, Token};

#[derive(StructOpt, Debug)]
#[structopt(name = "stree", about = "Builds a generalized suffix tree and queries it.")]
struct Options {
    /// Query suffixes; prints the indices of the strings ending with each pattern
    #[structopt(short = "f", long = "find")]
    find: Vec<String>,
    /// Print every suffix stored in the tree
    #[structopt(short = "s", long = "suffixes")]
    suffixes: bool,
    /// Print the tree, one edge per line
    #[structopt(short = "d", long = "dump")]
    dump: bool,
    /// Feed the strings one token at a time
    #[structopt(short = "i", long = "incremental")]
    incremental: bool,
    #[structopt(name = "INPUT")]
    strings: Vec<String>,
}

fn build(options: &Options) -> Result<SuffixTree, online_suffix_tree::SuffixTreeError> {
    let mut tree = SuffixTree::new();
    for s in &options.strings {
        if options.incremental {
            for c in s.chars() {
                tree.add_token(Token::Symbol(c))?;
            }
            let terminator = tree.terminator();
            tree.add_token(terminator)?;
        } else {
            tree.add(s)?;
        }
    }

    Ok(tree)
}

fn main() {
    env_logger::init();
    let options = Options::from_args();

    let tree = match build(&options) {
        Ok(tree) => tree,
        Err(e) => {
            error!("failed to build tree: {}", e);
            process::exit(1);
        }
    };
    info!("built tree over {} strings with {} nodes", tree.len(), tree.node_count());

    if options.dump {
        print!("{}", tree.render());
    }

    if options.suffixes {
        let mut suffixes = tree.all_suffixes();
        suffixes.sort_by_key(|s| s.chars().count());
        for suffix in suffixes {
            println!("{}", suffix);
        }
    }

    for pattern in &options.find {
        let matches = tree.find_suffix(pattern);
        let strings: Vec<&str> = matches
            .iter()
            .filter_map(|&index| tree.get_string_by_index(index).ok())
            .collect();
        println!("{}: {:?} {:?}", pattern, matches.as_slice(), strings);
    }
}
