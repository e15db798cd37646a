use std::{
    env,
    io::{self, BufRead},
    num::ParseIntError,
    str::FromStr,
};

use log::{info, warn, LevelFilter};
use rand::Rng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use thiserror::Error;

use rb_sentinel::prelude::*;

const MAX_KEY: i32 = 100;

#[derive(Error, Debug)]
enum InputError {
    #[error("Wrong input line!")]
    Arity,
    #[error("Wrong input line!")]
    Number(#[from] ParseIntError),
    #[error("Wrong input line!")]
    Code(i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Insert(i32),
    Delete(i32),
    Find(i32),
    Min,
    Max,
    Successor(i32),
    Predecessor(i32)
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = line.split_whitespace().collect::<Vec<_>>();
        let (code, argument) = match words[..] {
            [code] => (code.parse()?, 0),
            [code, argument] => (code.parse()?, argument.parse()?),
            _ => return Err(InputError::Arity)
        };
        Ok(match code {
            0 => Self::Quit,
            1 => Self::Insert(argument),
            2 => Self::Delete(argument),
            3 => Self::Find(argument),
            4 => Self::Min,
            5 => Self::Max,
            6 => Self::Successor(argument),
            7 => Self::Predecessor(argument),
            code => return Err(InputError::Code(code))
        })
    }
}

fn initialize_logging() {
    let level = env::var("RBTREE_LOG").ok()
        .and_then( |level| level.parse().ok() )
        .unwrap_or(LevelFilter::Warn);
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("cannot install logger: {e}");
    }
}

fn seed(tree: &mut Tree<i32>) {
    let count = env::var("RBTREE_SEED_KEYS").ok()
        .and_then( |count| count.parse::<usize>().ok() )
        .unwrap_or(11)
        .min(MAX_KEY as usize);
    let mut rng = rand::thread_rng();
    while tree.len() < count {
        tree.insert(rng.gen_range(1..=MAX_KEY));
    }
    info!("seeded {count} random keys");
}

fn main() -> io::Result<()> {
    initialize_logging();

    let mut tree = Tree::new();
    seed(&mut tree);
    print!("{}", tree.dump());

    for line in io::stdin().lock().lines() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{e:?}");
                println!("{e}");
                continue;
            }
        };
        let node = match command {
            Command::Quit => break,
            Command::Insert(key) => {
                if !tree.contains(&key) {
                    tree.insert(key);
                }
                print!("{}", tree.dump());
                continue;
            },
            Command::Delete(key) => {
                tree.remove(&key);
                print!("{}", tree.dump());
                continue;
            },
            Command::Find(key) => tree.find(&key),
            Command::Min => tree.min(),
            Command::Max => tree.max(),
            Command::Successor(key) => tree.successor(&key),
            Command::Predecessor(key) => tree.predecessor(&key)
        };
        if let Some(node) = node {
            println!("{node:?}");
        }
    }
    Ok(())
}
