/// The current pairing of researchers and bugs.
///
/// `left[l] == Some(r)` holds exactly when `right[r] == Some(l)`, once an augmenting chain is
/// complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    left: Vec<Option<usize>>,  // bug of researcher l
    right: Vec<Option<usize>>, // researcher of bug r
}

impl Pairing {
    /// A pairing in which nobody is paired.
    pub fn new(n_left: usize, n_right: usize) -> Pairing {
        Pairing { left: vec![None; n_left], right: vec![None; n_right] }
    }

    /// Pairs researcher `l` with bug `r`.
    ///
    /// Whoever held `l` or `r` before is not unpaired; the augmenting chain has already moved
    /// them elsewhere.
    #[inline(always)]
    pub fn pair(&mut self, l: usize, r: usize) {
        self.left[l] = Some(r);
        self.right[r] = Some(l);
    }

    #[inline(always)]
    pub fn is_left_paired(&self, l: usize) -> bool {
        self.left[l].is_some()
    }

    #[inline(always)]
    pub fn is_right_paired(&self, r: usize) -> bool {
        self.right[r].is_some()
    }

    /// The researcher paired with bug `r`.
    #[inline(always)]
    pub fn left_partner_of(&self, r: usize) -> Option<usize> {
        self.right[r]
    }

    /// The bug paired with researcher `l`.
    #[inline(always)]
    pub fn right_partner_of(&self, l: usize) -> Option<usize> {
        self.left[l]
    }

    /// Number of pairs, counted over the bugs.
    pub fn size(&self) -> usize {
        self.right.iter().filter(|l| l.is_some()).count()
    }

    /// Iterates over the pairs `(researcher, bug)` in researcher order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left
            .iter()
            .enumerate()
            .filter_map(|(l, r)| r.map(|r| (l, r)))
    }
}
