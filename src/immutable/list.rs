use std::fmt::{self, Debug, Formatter};
use std::iter::FromIterator;
use std::rc::Rc;

/// An immutable singly-linked list. `add` prepends in O(1) and every list
/// built from another shares the other's nodes rather than copying them.
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
}

struct Node<T> {
    element: T,
    rest: List<T>,
    size: usize,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { head: None }
    }

    pub fn add(&self, element: T) -> Self {
        let size = self.len() + 1;
        Self {
            head: Some(Rc::new(Node {
                element,
                rest: self.clone(),
                size,
            })),
        }
    }

    /// The most recently added element. Panics on an empty list.
    pub fn first(&self) -> &T {
        match &self.head {
            Some(node) => &node.element,
            None => panic!("first() called on an empty list"),
        }
    }

    /// Everything but the most recently added element. Panics on an empty list.
    pub fn rest(&self) -> &List<T> {
        match &self.head {
            Some(node) => &node.rest,
            None => panic!("rest() called on an empty list"),
        }
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.size)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The oldest element, i.e. the first one ever added.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self }
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    /// Drops the first element matching `predicate`. The suffix after the
    /// dropped element is shared with `self`; only the prefix is rebuilt.
    pub fn remove_where<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut prefix = vec![];
        let mut cursor = self;
        while let Some(node) = &cursor.head {
            if predicate(&node.element) {
                return prefix
                    .into_iter()
                    .rev()
                    .fold(node.rest.clone(), |list: List<T>, e: &T| list.add(e.clone()));
            }
            prefix.push(&node.element);
            cursor = &node.rest;
        }
        self.clone()
    }

    pub fn remove(&self, element: &T) -> Self
    where
        T: PartialEq + Clone,
    {
        self.remove_where(|e| e == element)
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively so that dropping a long list doesn't blow the stack.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(mut node) => head = node.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a, T> {
    next: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next.head.as_ref()?;
        self.next = &node.rest;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Collects so that iterating the resulting list yields the elements in the
/// order the iterator produced them.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        elements.into_iter().rev().fold(List::new(), |list, e| list.add(e))
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_list().entries(self.iter()).finish()
    }
}
