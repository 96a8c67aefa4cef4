// src/attacks/mod.rs
//
// Number-theoretic probes run against candidate tuples during the search.
//
// Tuple shape        Probe                        Reported on success
// ─────────────────────────────────────────────────────────────────────
// (m, d, n)          rsa_decryption_consistency   decrypted-message block
// (n, e, d)          rsa_key_consistency          rsa magic numbers block
//   └─ follow-up     rsa_factor_recovery          n = p * q
// (x, e, n, y)       powmod match (see testers)   x^e mod n == y block
//   └─ follow-up     wiener_continued_fraction    factorisation of n
//   └─ follow-up     wiener_bounded_search        factorisation of n
//
// Every probe is heuristic: a false negative just means the search moves
// on to the next tuple, and all failures are soft.

pub mod rsa;
pub mod wiener;
