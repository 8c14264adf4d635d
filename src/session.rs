//! src/session.rs
//!
//! 表单状态：当前输入与上一次的计算结果。
//! 字段逐个更新，只有提交时才重新计算，并整体替换旧结果。

use crate::calculator;
use crate::messages::Messages;
use crate::models::{CalcResult, Field, RawInput};
use crate::utils;
use std::io::{self, BufRead, Write};

/// 一轮逐项询问的结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// 四个字段都已问完，可以提交
    Complete,
    /// 输入结束或用户输入了 quit
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    form: RawInput,
    last_result: Option<CalcResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RawInput {
        &self.form
    }

    pub fn last_result(&self) -> Option<&CalcResult> {
        self.last_result.as_ref()
    }

    /// 更新单个字段。旧结果保留到下一次提交。
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn submit(&mut self, messages: &Messages) -> &CalcResult {
        self.last_result.insert(calculator::compute(&self.form, messages))
    }

    pub fn fish_label<'a>(&'a self, messages: &'a Messages) -> &'a str {
        utils::fish_label(&self.form.fish_name, messages)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 按表单顺序逐项询问。空行保留当前值，"-" 清空该字段。
    pub fn prompt_fields<R, W>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
        messages: &Messages,
    ) -> io::Result<PromptOutcome>
    where
        R: BufRead,
        W: Write,
    {
        for field in Field::ALL {
            write!(writer, "{} [{}]: ", field.prompt(messages), self.form.get(field))?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(PromptOutcome::Quit);
            }
            match line.trim() {
                "" => {}
                "quit" | "exit" => return Ok(PromptOutcome::Quit),
                "-" => self.update(field, ""),
                value => self.update(field, value),
            }
        }
        Ok(PromptOutcome::Complete)
    }
}
