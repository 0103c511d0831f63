use arch::inst::Inst;
use arch::op::Opcode;
use arch::program::Program;

use crate::error::RuntimeError;

/// The SUM machine: a fixed-size integer memory and a single accumulator.
/// Memory starts zeroed; the accumulator starts at 0 and is reset to 0
/// after every successful store.
pub struct State {
    mem: Vec<i32>,
    acc: i32,
}

// Memory access
impl State {
    pub fn get(&self, addr: usize) -> i32 {
        self.mem[addr]
    }

    pub fn mem(&self) -> &[i32] {
        &self.mem
    }

    pub fn acc(&self) -> i32 {
        self.acc
    }

    pub fn format_mem(&self) -> String {
        let cells: Vec<String> = self.mem.iter().map(|v| v.to_string()).collect();
        cells.join(" ")
    }
}

impl State {
    pub fn new(mem_size: usize) -> Self {
        State {
            mem: vec![0; mem_size],
            acc: 0,
        }
    }

    /// Execute the program start to finish, consuming words two at a time.
    /// Address and opcode faults are recorded and the scan continues; a
    /// trailing opcode with no operand halts before being executed.
    pub fn run(&mut self, program: &Program, trace: bool) -> Result<(), Vec<RuntimeError>> {
        let words = program.words();
        let mut errors = Vec::new();
        let mut pc = 0;
        while pc < words.len() {
            if pc + 1 >= words.len() {
                errors.push(RuntimeError::MalformedStream { index: pc });
                break;
            }
            let (word, operand) = (words[pc], words[pc + 1]);
            match Opcode::try_from(word) {
                Err(_) => errors.push(RuntimeError::InvalidOpcode { word, index: pc }),
                Ok(op) => {
                    let inst = Inst::decode(op, operand);
                    if trace {
                        println!("[{:0>4}] {:?}", pc, inst);
                    }
                    if let Err(e) = self.exec(inst) {
                        errors.push(e);
                    }
                }
            }
            pc += 2;
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn exec(&mut self, inst: Inst) -> Result<(), RuntimeError> {
        match inst {
            Inst::LOAD(addr) => self.load(addr),
            Inst::LOADI(value) => {
                self.loadi(value);
                Ok(())
            }
            Inst::STORE(addr) => self.store(addr),
        }
    }

    fn load(&mut self, addr: i32) -> Result<(), RuntimeError> {
        let idx = self.index(addr)?;
        self.acc = self.acc.wrapping_add(self.mem[idx]);
        Ok(())
    }

    fn loadi(&mut self, value: i32) {
        self.acc = self.acc.wrapping_add(value);
    }

    fn store(&mut self, addr: i32) -> Result<(), RuntimeError> {
        let idx = self.index(addr)?;
        self.mem[idx] = self.acc;
        self.acc = 0;
        Ok(())
    }

    fn index(&self, addr: i32) -> Result<usize, RuntimeError> {
        if addr < 0 || addr as usize >= self.mem.len() {
            return Err(RuntimeError::AddressOutOfBounds {
                addr,
                size: self.mem.len(),
            });
        }
        Ok(addr as usize)
    }
}
