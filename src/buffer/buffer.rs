use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice;

use crate::cursor::Store;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A fixed-length buffer of `T` in a single raw allocation, intended for sharing with host or
/// accelerator APIs that want a stable base pointer.
///
/// The length is set at construction and never changes. Elements can be written through a shared
/// reference (this is what makes the Buffer a [`Store`]), so no reference into the buffer's memory
/// is ever handed out while it is shared. Borrowed slice access is only available through
/// [`Buffer::as_mut_slice`], which requires exclusive access.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Buffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `read` | `O(1)` |
/// | `write` | `O(1)` |
/// | `len` | `O(1)` |
/// | `repeat` | `O(n)` |
/// | `clone` | `O(n)` |
pub struct Buffer<T: Copy> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: Copy> Buffer<T> {
    /// Creates a new Buffer with `len` copies of `item`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout size would exceed [`isize::MAX`].
    pub fn try_repeat(item: T, len: usize) -> Result<Buffer<T>, CapacityOverflow> {
        let ptr = Self::make_ptr(Self::make_layout(len)?);

        for i in 0..len {
            // SAFETY: The layout holds exactly len elements, so every offset in 0..len is within the
            // allocation.
            unsafe { ptr.add(i).write(item) }
        }

        Ok(Buffer {
            ptr,
            len,
            _phantom: PhantomData,
        })
    }

    /// Creates a new Buffer with `len` copies of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use cursor_algorithm::buffer::Buffer;
    /// let mut buf = Buffer::repeat(0_u16, 3);
    /// assert_eq!(buf.len(), 3);
    /// assert_eq!(buf.as_mut_slice(), &[0, 0, 0]);
    /// ```
    pub fn repeat(item: T, len: usize) -> Buffer<T> {
        Self::try_repeat(item, len).throw()
    }

    /// Creates a new Buffer of length `len`, where the element at each index `i` is `f(i)`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, mut f: F) -> Buffer<T> {
        // Owned before f runs, so a panicking f still releases the allocation. Drop never reads
        // elements, so the uninitialized tail is never observed.
        let buf = Buffer {
            ptr: Self::make_ptr(Self::make_layout(len).throw()),
            len,
            _phantom: PhantomData,
        };

        for i in 0..len {
            // SAFETY: The layout holds exactly len elements, so every offset in 0..len is within the
            // allocation.
            unsafe { buf.ptr.add(i).write(f(i)) }
        }
        buf
    }

    /// Creates a new Buffer holding a copy of `values`.
    ///
    /// # Examples
    /// ```
    /// # use cursor_algorithm::buffer::Buffer;
    /// let buf = Buffer::from_slice(&[1, 2, 2, 3]);
    /// assert_eq!(buf.iter().collect::<Vec<_>>(), [1, 2, 2, 3]);
    /// ```
    pub fn from_slice(values: &[T]) -> Buffer<T> {
        Self::from_fn(values.len(), |i| values[i])
    }

    /// Returns the number of elements in the Buffer.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Buffer has no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the base pointer of the Buffer, for handing to foreign APIs. The pointer is dangling
    /// (but aligned) for an empty Buffer or a zero-sized `T`.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns the mutable base pointer of the Buffer, for handing to foreign APIs.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Borrows the contents of the Buffer as a slice. Exclusive access guarantees that no cursor can
    /// write to the Buffer while the slice is alive.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: ptr refers to len initialized elements, and &mut self rules out any other access
        // for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns an iterator over copies of the Buffer's elements.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).filter_map(|i| self.read(i))
    }

    fn make_layout(len: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(len).map_err(|_| CapacityOverflow)
    }

    fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Copy> Store for Buffer<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn read(&self, index: usize) -> Option<T> {
        if index < self.len {
            // SAFETY: index is within the allocation and every element is initialized. No reference
            // into the allocation can be alive while &self is shared.
            Some(unsafe { self.ptr.add(index).read() })
        } else {
            None
        }
    }

    fn write(&self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            // SAFETY: As above. The pointer's provenance comes from the allocation rather than from
            // &self, so writing through it doesn't mutate behind a shared reference.
            unsafe { self.ptr.add(index).write(value) }
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T: Copy> Drop for Buffer<T> {
    fn drop(&mut self) {
        // Copy types have no drop glue, only the allocation needs releasing.
        if let Ok(layout) = Self::make_layout(self.len)
            && layout.size() != 0
        {
            // SAFETY: ptr was allocated with this exact layout in make_ptr.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T: Copy> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Buffer::from_fn(self.len, |i| {
            // SAFETY: from_fn only yields indices in 0..self.len.
            unsafe { self.ptr.add(i).read() }
        })
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Buffer<T> {
    fn from(values: [T; N]) -> Self {
        Buffer::from_slice(&values)
    }
}

impl<T: Copy + PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Eq> Eq for Buffer<T> {}

impl<T: Copy + Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// SAFETY: The Buffer uniquely owns its allocation, so moving it to another thread moves the
// elements with it. It isn't Sync because writes happen through &self.
unsafe impl<T: Copy + Send> Send for Buffer<T> {}
