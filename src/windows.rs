//! Lazy sliding windows over arbitrary iterators.
//!
//! Two flavours are provided: [`SizedWindows`], whose width is chosen at
//! runtime and which yields owned `Vec`s, and [`ArrayWindows`], whose width
//! is a const generic and which yields arrays. In both cases every window
//! is an independent copy; overlapping windows never share storage.

use std::{iter::FusedIterator, mem};

#[derive(Debug, Clone, Copy)]
enum State<B> {
    Begin,
    Buffered(B),
    Done,
}

impl<B> State<B> {
    fn take(&mut self) -> Self {
        mem::replace(self, State::Done)
    }
}

/// Windows of a width chosen at runtime. Created by
/// [`IterExt::sized_windows`].
#[derive(Debug, Clone)]
pub struct SizedWindows<I: Iterator> {
    iter: I,
    size: usize,
    state: State<Vec<I::Item>>,
}

impl<I: Iterator> Iterator for SizedWindows<I>
where
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let buffer = match self.state.take() {
            State::Begin => {
                let buffer: Vec<I::Item> = self.iter.by_ref().take(self.size).collect();
                if buffer.len() < self.size {
                    return None;
                }
                buffer
            }
            State::Buffered(buffer) => buffer,
            State::Done => return None,
        };

        if let Some(next) = self.iter.next() {
            self.state = State::Buffered(buffer[1..].iter().cloned().chain(Some(next)).collect())
        }

        Some(buffer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (min, max) = self.iter.size_hint();

        match self.state {
            State::Begin => (
                min.saturating_sub(self.size - 1),
                max.map(|max| max.saturating_sub(self.size - 1)),
            ),
            State::Buffered(_) => (
                min.saturating_add(1),
                max.and_then(|max| max.checked_add(1)),
            ),
            State::Done => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for SizedWindows<I> where I::Item: Clone {}

impl<I: ExactSizeIterator> ExactSizeIterator for SizedWindows<I>
where
    I::Item: Clone,
{
    fn len(&self) -> usize {
        match self.state {
            State::Begin => self.iter.len().saturating_sub(self.size - 1),
            State::Buffered(_) => self.iter.len() + 1,
            State::Done => 0,
        }
    }
}

/// Windows of a fixed width `N`, yielded as arrays. Created by
/// [`IterExt::streaming_windows`]. `N` must be at least 1.
#[derive(Debug, Clone, Copy)]
pub struct ArrayWindows<I: Iterator, const N: usize> {
    iter: I,
    state: State<[I::Item; N]>,
}

impl<I: Iterator, const N: usize> Iterator for ArrayWindows<I, N>
where
    I::Item: Clone,
{
    type Item = [I::Item; N];

    fn next(&mut self) -> Option<Self::Item> {
        let buffer = match self.state.take() {
            State::Begin => brownstone::try_build_iter(&mut self.iter)?,
            State::Buffered(buffer) => buffer,
            State::Done => return None,
        };

        if let Some(next) = self.iter.next() {
            self.state = State::Buffered(brownstone::build_iter(
                buffer[1..].iter().cloned().chain(Some(next)),
            ))
        }

        Some(buffer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (min, max) = self.iter.size_hint();

        match self.state {
            State::Begin => (
                min.saturating_sub(N - 1),
                max.map(|max| max.saturating_sub(N - 1)),
            ),
            State::Buffered(_) => (
                min.saturating_add(1),
                max.and_then(|max| max.checked_add(1)),
            ),
            State::Done => (0, Some(0)),
        }
    }
}

impl<I: Iterator, const N: usize> FusedIterator for ArrayWindows<I, N> where I::Item: Clone {}

impl<I: ExactSizeIterator, const N: usize> ExactSizeIterator for ArrayWindows<I, N>
where
    I::Item: Clone,
{
    fn len(&self) -> usize {
        match self.state {
            State::Begin => self.iter.len().saturating_sub(N - 1),
            State::Buffered(_) => self.iter.len() + 1,
            State::Done => 0,
        }
    }
}

/// Adapter handed to the closure in [`IterExt::use_oks`]. It yields the
/// `Ok` values and stops at the first `Err`, which it stashes.
#[derive(Debug)]
pub struct UseOksAdapter<'a, I, E> {
    iter: I,
    error: &'a mut Result<(), E>,
}

impl<I: Iterator<Item = Result<T, E>>, T, E> Iterator for UseOksAdapter<'_, I, E> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.error.as_ref().ok()?;
        self.iter
            .next()?
            .map_err(|err| {
                *self.error = Err(err);
            })
            .ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match *self.error {
            Err(_) => (0, Some(0)),
            Ok(()) => {
                let (_, max) = self.iter.size_hint();
                (0, max)
            }
        }
    }
}

impl<I, T, E> FusedIterator for UseOksAdapter<'_, I, E>
where
    I: Iterator<Item = Result<T, E>>,
    I: FusedIterator,
{
}

pub trait IterExt: Iterator + Sized {
    /// Slide a window of `size` items over this iterator. Yields nothing
    /// if the iterator is shorter than `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    fn sized_windows(self, size: usize) -> SizedWindows<Self>
    where
        Self::Item: Clone,
    {
        assert!(size != 0, "window size must be non-zero");

        SizedWindows {
            iter: self,
            size,
            state: State::Begin,
        }
    }

    fn streaming_windows<const N: usize>(self) -> ArrayWindows<Self, N>
    where
        Self::Item: Clone,
    {
        ArrayWindows {
            iter: self,
            state: State::Begin,
        }
    }

    /// Run `body` over the `Ok` items of this iterator. The first `Err`
    /// ends the iteration and is returned in place of `body`'s result.
    fn use_oks<T, U, E, F>(self, body: F) -> Result<U, E>
    where
        Self: Iterator<Item = Result<T, E>>,
        F: for<'a> FnOnce(UseOksAdapter<'a, Self, E>) -> U,
    {
        let mut err = Ok(());

        let value = body(UseOksAdapter {
            iter: self,
            error: &mut err,
        });

        err.map(|()| value)
    }
}

impl<I: Iterator> IterExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_windows() {
        let windows: Vec<Vec<i32>> = [1, 2, 3, 4].iter().copied().sized_windows(3).collect();

        assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);
    }

    #[test]
    fn test_sized_windows_singletons() {
        assert!((0..4)
            .sized_windows(1)
            .eq([vec![0], vec![1], vec![2], vec![3]]));
    }

    #[test]
    fn test_sized_windows_exact_fit() {
        assert!((0..3).sized_windows(3).eq([vec![0, 1, 2]]));
    }

    #[test]
    fn test_sized_windows_too_short() {
        let mut windows = (0..2).sized_windows(3);

        assert_eq!(windows.len(), 0);
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next(), None);
    }

    #[test]
    fn test_sized_windows_empty_input() {
        assert_eq!(std::iter::empty::<i32>().sized_windows(2).count(), 0);
    }

    #[test]
    #[should_panic(expected = "window size must be non-zero")]
    fn test_sized_windows_zero() {
        let _ = (0..4).sized_windows(0);
    }

    #[test]
    fn test_sized_windows_count_law() {
        for len in 0..8usize {
            for size in 1..6usize {
                let input: Vec<usize> = (0..len).collect();
                let windows: Vec<Vec<usize>> = input.iter().copied().sized_windows(size).collect();

                assert_eq!(windows.len(), (len + 1).saturating_sub(size));

                for (start, window) in windows.iter().enumerate() {
                    assert_eq!(window.as_slice(), &input[start..start + size]);
                }
            }
        }
    }

    #[test]
    fn test_sized_windows_size_hint() {
        let mut windows = (0..6).sized_windows(3);

        assert_eq!(windows.size_hint(), (4, Some(4)));
        assert_eq!(windows.next(), Some(vec![0, 1, 2]));

        assert_eq!(windows.size_hint(), (3, Some(3)));
        assert_eq!(windows.next(), Some(vec![1, 2, 3]));

        assert_eq!(windows.len(), 2);
        assert_eq!(windows.next(), Some(vec![2, 3, 4]));
        assert_eq!(windows.next(), Some(vec![3, 4, 5]));

        assert_eq!(windows.size_hint(), (0, Some(0)));
        assert_eq!(windows.next(), None);
    }

    #[test]
    fn test_streaming_windows() {
        assert!((0..6).streaming_windows().map(|[a, b, c]| [a, b, c]).eq([
            [0, 1, 2],
            [1, 2, 3],
            [2, 3, 4],
            [3, 4, 5],
        ]))
    }

    #[test]
    fn test_streaming_pairs() {
        let diffs: Vec<i32> = [1, 2, 4, 7]
            .iter()
            .streaming_windows()
            .map(|[a, b]| b - a)
            .collect();

        assert_eq!(diffs, [1, 2, 3]);
    }

    #[test]
    fn test_streaming_size_hint_inexact() {
        let mut windows = (0..6).streaming_windows().filter(|_| true);

        assert_eq!(windows.size_hint(), (0, Some(4)));
        assert_eq!(windows.next(), Some([0, 1, 2]));

        assert_eq!(windows.size_hint(), (0, Some(3)));
        assert_eq!(windows.next(), Some([1, 2, 3]));
    }

    #[test]
    fn test_use_oks_stops_at_error() {
        let items = vec![Ok(1), Ok(2), Err("bad"), Ok(4)];
        let result = items.into_iter().use_oks(|oks| oks.collect::<Vec<i32>>());

        assert_eq!(result, Err("bad"));
    }

    #[test]
    fn test_use_oks_all_ok() {
        let items: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2)];
        let result = items.into_iter().use_oks(|oks| oks.sum::<i32>());

        assert_eq!(result, Ok(3));
    }
}
