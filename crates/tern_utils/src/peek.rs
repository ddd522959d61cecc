pub trait Peek: Iterator {
    fn peek_nth(&self, n: usize) -> Option<Self::Item>;

    fn peek(&self) -> Option<Self::Item> {
        self.peek_nth(0)
    }

    fn eat<P>(&mut self, pat: P) -> bool
    where
        Self::Item: PartialEq<P>,
    {
        match self.peek() {
            Some(item) if item == pat => {
                self.next();
                true
            }
            _ => false,
        }
    }

    fn eat_while(&mut self, mut f: impl FnMut(&Self::Item) -> bool) -> usize {
        let mut eaten = 0;
        while self.peek().is_some_and(|item| f(&item)) {
            self.next();
            eaten += 1;
        }
        eaten
    }
}

impl Peek for std::str::Chars<'_> {
    fn peek_nth(&self, n: usize) -> Option<Self::Item> {
        self.clone().nth(n)
    }
}

#[cfg(test)]
mod tests {
    use super::Peek;

    #[test]
    fn peek_does_not_advance() {
        let chars = "ab".chars();
        assert_eq!(chars.peek(), Some('a'));
        assert_eq!(chars.peek_nth(1), Some('b'));
        assert_eq!(chars.peek_nth(2), None);
        assert_eq!(chars.as_str(), "ab");
    }

    #[test]
    fn eat_only_on_match() {
        let mut chars = "::x".chars();
        assert!(!chars.eat('x'));
        assert!(chars.eat(':'));
        assert!(chars.eat(':'));
        assert_eq!(chars.as_str(), "x");
    }

    #[test]
    fn eat_while_counts() {
        let mut chars = "123abc".chars();
        assert_eq!(chars.eat_while(char::is_ascii_digit), 3);
        assert_eq!(chars.as_str(), "abc");
    }
}
