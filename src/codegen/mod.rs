//! Transpiling backend: lowers an instruction stream to assembly text.
//!
//! A target is a fixed bundle of architecture constants (registers,
//! syscall numbers, addressing idiom) behind the [`CodeGen`] trait;
//! supporting another architecture means another implementation of the
//! trait, not a runtime switch inside this one.

mod aarch64;

pub use aarch64::Aarch64;

use std::error::Error;
use std::fmt;

use crate::instruction::Instruction;
use crate::program::Program;

/// An instruction kind the target has no lowering for.
///
/// Generation treats this as a diagnostic, not a failure: the offending
/// instruction is reported and skipped so a partial pipeline still
/// produces inspectable output.
#[derive(Debug)]
pub struct UnsupportedInstruction {
    pub index: usize,
    pub instruction: Instruction,
}

impl fmt::Display for UnsupportedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "no lowering for {:?} at index {}",
            self.instruction, self.index
        )
    }
}

impl Error for UnsupportedInstruction {}

/// A target architecture the generator can emit for.
pub trait CodeGen {
    /// Entry point, tape-base setup, anything that precedes the first
    /// lowered instruction.
    fn prologue(&self, output: &mut String);

    /// Appends the lowering of one instruction. `index` is the
    /// instruction's position in the stream, which jump lowerings use
    /// for their labels.
    fn lower(
        &self,
        index: usize,
        instruction: Instruction,
        output: &mut String,
    ) -> Result<(), UnsupportedInstruction>;

    /// Exit sequence and static data.
    fn epilogue(&self, output: &mut String);
}

/// Lowers the whole stream for `target`, returning the assembly text.
///
/// Deterministic: the same stream always yields byte-identical output.
/// Instructions the target rejects are reported to stderr and skipped.
pub fn generate(target: &impl CodeGen, program: &Program) -> String {
    let mut output = String::new();

    target.prologue(&mut output);

    for (index, &instruction) in program.iter().enumerate() {
        if let Err(err) = target.lower(index, instruction, &mut output) {
            eprintln!("Skipping instruction: {}", err);
        }
    }

    target.epilogue(&mut output);

    output
}
