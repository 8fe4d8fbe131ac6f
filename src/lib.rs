pub mod core;
pub mod analysis;
pub mod corpus;
pub mod index;
pub mod query;
pub mod search;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                          BOOLDEX PIPELINE                                     │
└──────────────────────────────────────────────────────────────────────────────┘

  manifest ──► corpus::manifest::Corpus          ids 1..N in manifest order
                     │
                     ▼
  text ───► analysis::Analyzer (dyn Preprocessor)     tokenize → filters → terms
                     │
                     ▼
            index::index_writer::IndexWriter      per-document term tally
                     │ finish()  (freeze)
                     ▼
            index::inverted::InvertedIndex  ──►  index::serializer   "term: d,f d,f"
                     │ Arc, read-only
                     ▼
  query ──► query::parser::QueryParser  ──►  query::ast::Query
                                              Query    = AndGroup | AndGroup ...
                                              AndGroup = Atom Atom ...
                                              Atom     = [!]term
                     │
                     ▼
            search::executor::QueryExecutor       RoaringBitmap set algebra
                     │                            NOT against {1..N}, then ∩, then ∪
                     ▼
            search::results                  ──►  "count\npath\npath..."

  core::database::Database wires the above into one batch run.
*/
