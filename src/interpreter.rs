use std::io::{self, Read, Write};

use crate::instruction::Instruction;
use crate::program::Program;
use crate::TAPE_LEN;

/// Tree-walking backend: executes a [`Program`] against a fixed tape of
/// [`TAPE_LEN`] byte cells.
///
/// The data pointer wraps modulo the tape length in both directions and
/// cell arithmetic wraps modulo 256; neither is ever a fault. Reading
/// past the end of `input` stores 0 in the current cell, so execution
/// stays deterministic after the input source runs dry.
///
/// [`step`](Interpreter::step) executes one instruction at a time; a
/// caller that needs to bound a runaway program can stop stepping
/// whenever it likes and inspect [`pc`](Interpreter::pc) between steps.
pub struct Interpreter<'a, R, W> {
    program: &'a Program,
    tape: [u8; TAPE_LEN],
    pointer: usize,
    pc: usize,
    input: R,
    output: W,
}

impl<'a, R: Read, W: Write> Interpreter<'a, R, W> {
    pub fn new(program: &'a Program, input: R, output: W) -> Self {
        Self {
            program,
            tape: [0; TAPE_LEN],
            pointer: 0,
            pc: 0,
            input,
            output,
        }
    }

    /// Index of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Current position of the data pointer.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    pub fn is_done(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Executes the instruction at the program counter.
    ///
    /// Returns `Ok(false)` once the counter has passed the last
    /// instruction, `Ok(true)` after executing one instruction. I/O
    /// failures from the collaborators propagate as `io::Error`.
    pub fn step(&mut self) -> io::Result<bool> {
        let instruction = match self.program.get(self.pc) {
            Some(&instruction) => instruction,
            None => return Ok(false),
        };

        match instruction {
            Instruction::Inc(count) => {
                let cell = &mut self.tape[self.pointer];
                *cell = cell.wrapping_add(count as u8);
            }
            Instruction::Dec(count) => {
                let cell = &mut self.tape[self.pointer];
                *cell = cell.wrapping_sub(count as u8);
            }
            Instruction::Right(count) => {
                self.pointer = (self.pointer + count % TAPE_LEN) % TAPE_LEN;
            }
            Instruction::Left(count) => {
                self.pointer = (self.pointer + TAPE_LEN - count % TAPE_LEN) % TAPE_LEN;
            }
            Instruction::Output => {
                self.output.write_all(&[self.tape[self.pointer]])?;
                self.output.flush()?;
            }
            Instruction::Input => {
                let mut byte = [0];
                self.tape[self.pointer] = match self.input.read(&mut byte)? {
                    // End of input; defined fallback so programs that
                    // read past their input keep running.
                    0 => 0,
                    _ => byte[0],
                };
            }
            Instruction::JumpIfZero(target) => {
                if self.tape[self.pointer] == 0 {
                    // Land on the partner bracket; its own check falls
                    // through and execution continues past the loop.
                    self.pc = target;
                    return Ok(true);
                }
            }
            Instruction::JumpIfNonZero(target) => {
                if self.tape[self.pointer] != 0 {
                    self.pc = target;
                    return Ok(true);
                }
            }
        }

        self.pc += 1;
        Ok(true)
    }

    /// Runs to completion. Does not return while the program loops
    /// forever; that is the program's prerogative.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? {}
        Ok(())
    }
}
