
use std::collections::VecDeque;
use std::io::{self, Read};

/// Scripted reads for exercising partial, blocked and interrupted input.
pub(crate) enum Step {
    Data(Vec<u8>),
    WouldBlock,
    Interrupted,
}

pub(crate) struct ScriptedReader {
    steps: VecDeque<Step>,
}

impl ScriptedReader {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
        }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.steps.pop_front() {
            None => Ok(0),
            Some(Step::WouldBlock) => Err(io::ErrorKind::WouldBlock.into()),
            Some(Step::Interrupted) => Err(io::ErrorKind::Interrupted.into()),
            Some(Step::Data(mut data)) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    self.steps.push_front(Step::Data(data.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}
