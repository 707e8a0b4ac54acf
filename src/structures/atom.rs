/*!
(The internal representation of) an atom, aka. a 'variable', aka. a 'proposition' when named.

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That the atoms are [0..*m*) for some *m*.

This representation allows atoms to be used as the indicies of a structure, e.g. `valuation[a]`.

The atom `0` is fixed internally with a value of true, so the atoms of interest begin at `1`.

```rust
# use otter_world::structures::atom::{Atom, TOP_ATOM};
let atoms = (0..4).collect::<Vec<Atom>>();
assert_eq!(atoms[0], TOP_ATOM);
```
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom `0` is fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Bounded by i32 so a literal always has an integer representation.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
