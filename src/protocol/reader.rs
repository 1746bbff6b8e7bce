//! Line-oriented input reader
//!
//! Startup:   `width height`, then `height` map rows (`' '` floor, `'#'` wall)
//! Per round: `my_score opponent_score`
//!            `visible_pac_count`, then `id mine x y TYPE speed_turns_left cooldown` per pac
//!            `visible_pellet_count`, then `x y value` per pellet

use std::io::BufRead;

use nom::character::complete::{alpha1, i32 as int32, space0, space1, u32 as uint32};
use nom::combinator::all_consuming;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};

use crate::core::error::{BotError, Result};
use crate::core::snapshot::{Pac, Pellet, RoundSnapshot};
use crate::core::types::{Coord, PacType, Round};
use crate::map::GameMap;

type PacFields<'a> = (u32, u32, i32, i32, &'a str, u32, u32);

fn pair(input: &str) -> IResult<&str, (u32, u32)> {
    (uint32, preceded(space1, uint32)).parse(input)
}

fn count(input: &str) -> IResult<&str, u32> {
    uint32(input)
}

fn pac_fields(input: &str) -> IResult<&str, PacFields<'_>> {
    (
        uint32,
        preceded(space1, uint32),
        preceded(space1, int32),
        preceded(space1, int32),
        preceded(space1, alpha1),
        preceded(space1, uint32),
        preceded(space1, uint32),
    )
        .parse(input)
}

fn pellet_fields(input: &str) -> IResult<&str, (i32, i32, u32)> {
    (int32, preceded(space1, int32), preceded(space1, uint32)).parse(input)
}

/// Reads the startup map and per-round snapshots from a text stream
pub struct InputReader<R: BufRead> {
    input: R,
    line_no: usize,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, line_no: 0 }
    }

    /// Number of lines consumed so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Read the map header and rows
    pub fn read_map(&mut self) -> Result<GameMap> {
        let header = self.expect_line("map dimensions")?;
        let (width, height) = self.parse_with(&header, pair, "map dimensions")?;

        let mut rows = Vec::new();
        for _ in 0..height {
            let row = self.expect_line("map row")?;
            tracing::debug!("{}", row);
            rows.push(row);
        }

        let map = GameMap::from_rows(&rows)?;
        if map.width != width as usize {
            return Err(self.error(format!(
                "header says width {} but rows have width {}",
                width, map.width
            )));
        }
        Ok(map)
    }

    /// Read one round; `None` when the stream ends before the round starts
    pub fn read_round(&mut self, round: Round) -> Result<Option<RoundSnapshot>> {
        let Some(score_line) = self.next_line()? else {
            return Ok(None);
        };
        let (my_score, opponent_score) = self.parse_with(&score_line, pair, "scores")?;

        let pac_count = self.read_count("visible pac count")?;
        let mut visible_pacs = Vec::new();
        for _ in 0..pac_count {
            let line = self.expect_line("pac record")?;
            let (id, mine, x, y, type_id, speed, cooldown) =
                self.parse_with(&line, pac_fields, "pac record")?;
            let pac_type: PacType = type_id.parse()?;
            visible_pacs.push(
                Pac::new(id, mine != 0, Coord::new(x, y), pac_type)
                    .with_speed(speed)
                    .with_cooldown(cooldown),
            );
        }

        let pellet_count = self.read_count("visible pellet count")?;
        let mut visible_pellets = Vec::new();
        for _ in 0..pellet_count {
            let line = self.expect_line("pellet record")?;
            let (x, y, value) = self.parse_with(&line, pellet_fields, "pellet record")?;
            visible_pellets.push(Pellet::new(Coord::new(x, y), value));
        }

        Ok(Some(RoundSnapshot {
            round,
            my_score,
            opponent_score,
            visible_pacs,
            visible_pellets,
        }))
    }

    fn read_count(&mut self, what: &str) -> Result<u32> {
        let line = self.expect_line(what)?;
        self.parse_with(&line, count, what)
    }

    /// Next line without its line terminator; `None` at end of input
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn expect_line(&mut self, what: &str) -> Result<String> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(self.error(format!("unexpected end of input, expected {}", what))),
        }
    }

    /// Run a record parser over a whole line, allowing surrounding blanks
    fn parse_with<'a, O>(
        &self,
        line: &'a str,
        parser: fn(&'a str) -> IResult<&'a str, O>,
        what: &str,
    ) -> Result<O> {
        all_consuming(delimited(space0, parser, space0))
            .parse(line)
            .map(|(_, out)| out)
            .map_err(|e| self.error(format!("malformed {} {:?}: {}", what, line, e)))
    }

    fn error(&self, message: String) -> BotError {
        BotError::Protocol {
            line: self.line_no,
            message,
        }
    }
}
