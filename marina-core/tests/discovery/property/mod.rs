mod selection_invariants;
