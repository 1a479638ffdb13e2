//! Day 9: Disk Fragmenter.

use crate::error::{Error, Result};
use itertools::Itertools;

/// One block of the disk: the id of the file it belongs to, if any.
pub type Block = Option<u32>;

pub fn parse_disk_map(input: &str) -> Result<Vec<u8>> {
    input
        .trim()
        .bytes()
        .map(|c| match c {
            b'0'..=b'9' => Ok(c - b'0'),
            _ => Err(Error::malformed(format!("{:?} in disk map", c as char))),
        })
        .collect()
}

/// Expands the dense map: files and free space alternate, starting with file 0.
pub fn blocks(map: &[u8]) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(9 * map.len());
    for (i, &len) in map.iter().enumerate() {
        let block = (i % 2 == 0).then_some(i as u32 / 2);
        blocks.extend(std::iter::repeat(block).take(len as usize));
    }
    blocks
}

pub fn render(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Some(id) => id.to_string(),
            None => ".".to_owned(),
        })
        .join("")
}

/// Moves blocks one at a time from the end of the disk into the leftmost gap.
pub fn compact_blocks(blocks: &mut [Block]) {
    let mut block_iter = blocks.iter_mut();
    loop {
        let Some(left) = block_iter.find(|block| block.is_none()) else {break};
        let Some(right) = block_iter.rfind(|block| block.is_some()) else {break};
        std::mem::swap(left, right);
    }
}

struct Span {
    start: usize,
    len: usize,
}

/// Moves whole files, highest id first, into the leftmost gap that fits.
/// Each file moves at most once and only to the left.
pub fn compact_files(map: &[u8]) -> Vec<Block> {
    let mut files = vec![];
    let mut gaps = vec![];
    let mut start = 0;
    for (i, &len) in map.iter().enumerate() {
        let span = Span { start, len: len as usize };
        if i % 2 == 0 {files.push(span)} else {gaps.push(span)}
        start += len as usize;
    }

    for file in files.iter_mut().rev() {
        let gap = gaps
            .iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len);
        if let Some(gap) = gap {
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }
    }

    let mut blocks = vec![None; start];
    for (id, file) in files.iter().enumerate() {
        blocks[file.start..][..file.len].fill(Some(id as u32));
    }
    blocks
}

pub fn checksum(blocks: &[Block]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, block)| block.map(|id| pos as u64 * id as u64))
        .sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = parse_disk_map(input)?;
    let disk = if part == 1 {
        let mut disk = blocks(&map);
        compact_blocks(&mut disk);
        disk
    } else {
        compact_files(&map)
    };
    Ok(checksum(&disk).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn expands_and_compacts_small_map() {
        let mut disk = blocks(&parse_disk_map("12345").unwrap());
        assert_eq!(render(&disk), "0..111....22222");
        compact_blocks(&mut disk);
        assert_eq!(render(&disk), "022111222......");
    }

    #[test]
    fn example_block_compaction() {
        let mut disk = blocks(&parse_disk_map(EXAMPLE).unwrap());
        assert_eq!(render(&disk), "00...111...2...333.44.5555.6666.777.888899");
        compact_blocks(&mut disk);
        assert_eq!(render(&disk), "0099811188827773336446555566..............");
        assert_eq!(checksum(&disk), 1928);
    }

    #[test]
    fn example_file_compaction() {
        let disk = compact_files(&parse_disk_map(EXAMPLE).unwrap());
        assert_eq!(render(&disk), "00992111777.44.333....5555.6666.....8888..");
        assert_eq!(checksum(&disk), 2858);
    }

    #[test]
    fn files_only_move_left() {
        let disk = compact_files(&parse_disk_map("12123").unwrap());
        assert_eq!(render(&disk), "01....222");
    }

    #[test]
    fn rejects_non_digits() {
        assert!(parse_disk_map("12a3").is_err());
    }
}
