use std::io;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{App, Arg};
use mem_fs::{Clock, MemFileSystem};

mod session;

use session::Session;

/// 墙钟时间源，注入给引擎作为 inode 创建时刻的来源
struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

pub fn main() {
    let matches = App::new("mem-fs shell")
        .arg(
            Arg::with_name("capacity")
                .short("c")
                .long("capacity")
                .takes_value(true)
                .default_value("80")
                .help("Total memory capacity in bytes"),
        )
        .arg(
            Arg::with_name("block-size")
                .short("b")
                .long("block-size")
                .takes_value(true)
                .default_value("8")
                .help("Block size in bytes"),
        )
        .get_matches();

    let capacity: usize = matches
        .value_of("capacity")
        .unwrap()
        .parse()
        .expect("capacity must be a number of bytes");
    let block_size: usize = matches
        .value_of("block-size")
        .unwrap()
        .parse()
        .expect("block size must be a number of bytes");

    let fs = MemFileSystem::new(capacity, block_size, Arc::new(SystemClock));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(fs, stdin.lock(), stdout.lock());
    session.run().expect("session I/O failed");
}
