// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone)]
pub struct Strider {
    base: usize,
    len: usize,
}

impl Strider {
    #[inline(always)]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: usize) -> usize {
        self.base + idx
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: usize,
    pub cols: usize,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: usize) -> Strider {
        Strider {
            base: row * self.cols,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline(always)]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline(always)]
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    // bingo boards are square; this is the number reported to the player.
    #[inline(always)]
    pub fn size(&self) -> usize {
        std::cmp::max(self.rows, self.cols)
    }
}
