//! Expansion of pair adjustment subtables into kerning pairs.
//!
//! Both expanders append into a shared, insertion-ordered set so that
//! deduplication spans every subtable of every kern lookup.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::{
    classes::transpose,
    model::{PairClasses, PairGlyphs},
    table::KernPair,
};

/// Expand a format 1 subtable (explicit pairs).
///
/// Pairs come out in coverage order, then pair-set order. Zero adjustments
/// are kept.
pub fn expand_format1<G>(table: &PairGlyphs<G>, pairs: &mut IndexSet<KernPair<G>>)
where
    G: Clone + Eq + Hash,
{
    for (first, set) in table.coverage.iter().zip(&table.pair_sets) {
        for record in set {
            pairs.insert(KernPair::new(
                first.clone(),
                record.second.clone(),
                record.x_advance.into(),
            ));
        }
    }
}

/// Expand a format 2 subtable (class pairs).
///
/// Cells are visited class 1 first, class 2 second. A cell is skipped when
/// either class has no listed glyphs or its adjustment is zero; otherwise
/// every glyph of class 1 is paired with every glyph of class 2.
pub fn expand_format2<G>(table: &PairClasses<G>, pairs: &mut IndexSet<KernPair<G>>)
where
    G: Clone + Eq + Hash,
{
    let classes1 = transpose(table.class_def1.iter().cloned());
    let classes2 = transpose(table.class_def2.iter().cloned());

    for (class1, row) in table.class1_records.iter().enumerate() {
        let Some(glyphs1) = classes1.get(&(class1 as u16)) else {
            continue;
        };
        for (class2, &value) in row.iter().enumerate() {
            let Some(glyphs2) = classes2.get(&(class2 as u16)) else {
                continue;
            };
            if value == 0 {
                continue;
            }
            for left in glyphs1 {
                for right in glyphs2 {
                    pairs.insert(KernPair::new(left.clone(), right.clone(), value.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PairValue;

    fn collect(pairs: IndexSet<KernPair<&'static str>>) -> Vec<(&'static str, &'static str, i32)> {
        pairs.into_iter().map(|p| (p.left, p.right, p.value)).collect()
    }

    #[test]
    fn test_format1_pairs_in_coverage_order() {
        let table = PairGlyphs {
            coverage: vec!["A", "B"],
            pair_sets: vec![vec![PairValue::new("C", 10)], vec![PairValue::new("D", -5)]],
        };
        let mut pairs = IndexSet::new();

        expand_format1(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("A", "C", 10), ("B", "D", -5)]);
    }

    #[test]
    fn test_format1_keeps_zero() {
        let table = PairGlyphs {
            coverage: vec!["A"],
            pair_sets: vec![vec![PairValue::new("B", 0), PairValue::new("C", 3)]],
        };
        let mut pairs = IndexSet::new();

        expand_format1(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("A", "B", 0), ("A", "C", 3)]);
    }

    #[test]
    fn test_format1_skips_existing_pairs() {
        let table = PairGlyphs {
            coverage: vec!["A"],
            pair_sets: vec![vec![PairValue::new("B", 4), PairValue::new("B", 4)]],
        };
        let mut pairs = IndexSet::from([KernPair::new("X", "Y", 1)]);

        expand_format1(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("X", "Y", 1), ("A", "B", 4)]);
    }

    #[test]
    fn test_format1_pair_set_without_coverage() {
        let table = PairGlyphs {
            coverage: vec!["A"],
            pair_sets: vec![vec![PairValue::new("B", 1)], vec![PairValue::new("C", 2)]],
        };
        let mut pairs = IndexSet::new();

        expand_format1(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("A", "B", 1)]);
    }

    #[test]
    fn test_format2_cartesian_product() {
        let table = PairClasses {
            class_def1: vec![("A", 1), ("Aacute", 1)],
            class_def2: vec![("V", 1), ("W", 1)],
            class1_records: vec![vec![0, 0], vec![0, -60]],
        };
        let mut pairs = IndexSet::new();

        expand_format2(&table, &mut pairs);

        assert_eq!(
            collect(pairs),
            vec![("A", "V", -60), ("A", "W", -60), ("Aacute", "V", -60), ("Aacute", "W", -60)]
        );
    }

    #[test]
    fn test_format2_drops_zero() {
        let table = PairClasses {
            class_def1: vec![("A", 1)],
            class_def2: vec![("V", 1), ("o", 2)],
            class1_records: vec![vec![0, 0, 0], vec![0, 0, 25]],
        };
        let mut pairs = IndexSet::new();

        expand_format2(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("A", "o", 25)]);
    }

    #[test]
    fn test_format2_sparse_classes() {
        // Class 2 of the first definition and class 1 of the second have no glyphs.
        let table = PairClasses {
            class_def1: vec![("A", 1), ("T", 3)],
            class_def2: vec![("o", 2)],
            class1_records: vec![
                vec![5, 5, 5],
                vec![7, 8, 9],
                vec![11, 12, 13],
                vec![14, 15, 16],
            ],
        };
        let mut pairs = IndexSet::new();

        expand_format2(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("A", "o", 9), ("T", "o", 16)]);
    }

    #[test]
    fn test_format2_class_zero_row_and_column_need_listed_glyphs() {
        // Only classes 1 are listed, so the non-zero class 0 cells stay unused.
        let table = PairClasses {
            class_def1: vec![("A", 1)],
            class_def2: vec![("V", 1)],
            class1_records: vec![vec![-50, -50], vec![-50, -20]],
        };
        let mut pairs = IndexSet::new();

        expand_format2(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("A", "V", -20)]);
    }

    #[test]
    fn test_format2_dedups_against_existing() {
        let table = PairClasses {
            class_def1: vec![("A", 1)],
            class_def2: vec![("V", 1)],
            class1_records: vec![vec![0, 0], vec![0, -30]],
        };
        let mut pairs = IndexSet::from([KernPair::new("A", "V", -30)]);

        expand_format2(&table, &mut pairs);

        assert_eq!(collect(pairs), vec![("A", "V", -30)]);
    }
}
