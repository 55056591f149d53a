use std::io::{BufRead, Write};

use mem_fs::MemFileSystem;

/// 交互会话：持有存储引擎与注入的输入输出流。
/// 每行输入按空白切分，首个词是命令名，其余是参数。
/// 引擎报错只会打印消息，会话继续运行，绝不因此退出进程。
pub struct Session<R, W> {
    fs: MemFileSystem,
    input: R,
    output: W,
}

fn first_arg<'a>(args: &[&'a str]) -> Result<&'a str, String> {
    args.first()
        .copied()
        .ok_or_else(|| String::from("missing path argument"))
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(fs: MemFileSystem, input: R, output: W) -> Self {
        Self { fs, input, output }
    }

    /// 读取-求值-打印循环，输入耗尽或收到 exit 时结束
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.output, "fs> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.split_first() {
                None => continue,
                Some((&"exit", _)) => break,
                Some((&command, args)) => {
                    let reply = match self.eval(command, args) {
                        Ok(message) => message,
                        Err(message) => message,
                    };
                    writeln!(self.output, "{}", reply)?;
                }
            }
        }
        Ok(())
    }

    /// 把一条命令派发到引擎，返回要打印的一行回应
    fn eval(&mut self, command: &str, args: &[&str]) -> Result<String, String> {
        match command {
            "createFile" => {
                let path = first_arg(args)?;
                self.fs.create_file(path).map_err(|e| e.to_string())?;
                Ok(format!("File created: {}", path))
            }
            "writeFile" => {
                let (path, words) = args
                    .split_first()
                    .ok_or_else(|| String::from("usage: writeFile <path> <content>"))?;
                // 余下的词以单个空格重新拼接成内容
                let content = words.join(" ");
                self.fs
                    .write_file(path, content.as_bytes())
                    .map_err(|e| e.to_string())?;
                Ok(format!("Wrote {} bytes to {}", content.len(), path))
            }
            "readFile" => {
                let path = first_arg(args)?;
                let content = self.fs.read_file(path).map_err(|e| e.to_string())?;
                Ok(String::from_utf8_lossy(&content).into_owned())
            }
            "delete" => {
                let path = first_arg(args)?;
                self.fs.delete_file(path).map_err(|e| e.to_string())?;
                Ok(format!("File deleted: {}", path))
            }
            "copy" => {
                let source = first_arg(args)?;
                let destination = args
                    .get(1)
                    .copied()
                    .ok_or_else(|| String::from("no destination file"))?;
                self.fs
                    .copy_file(source, destination)
                    .map_err(|e| e.to_string())?;
                Ok(format!("Copied {} to {}", source, destination))
            }
            "mkdir" => {
                let path = first_arg(args)?;
                self.fs.create_dir(path);
                Ok(format!("Directory created: {}", path))
            }
            "list" => {
                let path = args.first().copied().unwrap_or("/");
                let listing = self.fs.list(path).map_err(|e| e.to_string())?;
                Ok(format!(
                    "files: [{}]  directories: [{}]",
                    listing.files.join(", "),
                    listing.directories.join(", ")
                ))
            }
            "stats" => {
                let stats = self.fs.stats();
                Ok(format!(
                    "files: {}, total: {} bytes, occupied: {} bytes, available: {} bytes",
                    stats.file_count,
                    stats.total_space,
                    stats.occupied_space,
                    stats.available_space
                ))
            }
            _ => Err(format!("invalid command: {}", command)),
        }
    }
}
