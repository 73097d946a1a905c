use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Pipes assembly text to the system assembler, producing `out_name`.
///
/// Returns the assembler's exit code, or `None` if it was killed by a
/// signal. Spawning failures surface as `io::Error`.
pub fn assemble(code: &str, out_name: &str, debug: bool) -> io::Result<Option<i32>> {
    let mut command = Command::new("as");
    if debug {
        command.arg("-g");
    }
    let mut child = command
        .arg("-o")
        .arg(out_name)
        .arg("-") // Standard input
        .stdin(Stdio::piped())
        .spawn()?;

    child.stdin.take().unwrap().write_all(code.as_bytes())?;

    Ok(child.wait()?.code())
}

/// Links one object file into an executable with the Mach-O entry point
/// the generated assembly declares.
pub fn link(o_name: &str, out_name: &str) -> io::Result<Option<i32>> {
    Ok(Command::new("ld")
        .arg("-o")
        .arg(out_name)
        .arg(o_name)
        .arg("-lSystem")
        .arg("-e")
        .arg("_main")
        .spawn()?
        .wait()?
        .code())
}
