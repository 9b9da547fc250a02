//! Turning the segments of a projection into mappings.

use tracing::debug;
use tracing::warn;

use crate::core::Interval;
use crate::liftover::Mapping;
use crate::provider::Projection;

/// Converts the `projection` of `interval` into one [`Mapping`] per segment.
///
/// The original side of each mapping covers `interval.start() +
/// segment.source_offset_start()` through `interval.start() +
/// segment.source_offset_end()` (both inclusive) on the same sequence region as
/// `interval`. Its strand, coordinate system, and assembly come from the
/// queried region of the projection, not from the segment. The mapped side is
/// the segment's target region, unaltered.
///
/// Mappings are returned in the order of the segments. Adjacent or
/// overlapping segments are neither sorted nor merged. A segment whose offsets
/// would overflow a [`Position`](crate::core::interval::Position) is dropped
/// with a warning.
///
/// # Examples
///
/// ```
/// use ensembl_liftover::core::Interval;
/// use ensembl_liftover::core::Region;
/// use ensembl_liftover::core::Strand;
/// use ensembl_liftover::liftover::projector;
/// use ensembl_liftover::provider::Projection;
/// use ensembl_liftover::provider::Segment;
///
/// let interval = Interval::new("chr1", 1000, 2000);
/// let source = Region::new(interval.clone(), Strand::Positive, "chromosome", "GRCh37");
/// let target = Region::new(
///     Interval::new("chr1", 5000, 5999),
///     Strand::Positive,
///     "chromosome",
///     "GRCh38",
/// );
///
/// let projection = Projection::new(source, vec![Segment::new(0, 999, target.clone())]);
/// let mappings = projector::project(&interval, projection);
///
/// assert_eq!(mappings.len(), 1);
/// assert_eq!(mappings[0].original().start(), 1000);
/// assert_eq!(mappings[0].original().end(), 1999);
/// assert_eq!(mappings[0].mapped(), &target);
/// ```
pub fn project(interval: &Interval, projection: Projection) -> Vec<Mapping> {
    let (source, segments) = projection.into_parts();

    segments
        .into_iter()
        .filter_map(|segment| {
            let start = interval.start().checked_add(segment.source_offset_start());
            let end = interval.start().checked_add(segment.source_offset_end());

            let (Some(start), Some(end)) = (start, end) else {
                warn!(
                    "dropping segment of {interval} with out of range offsets {}..{}",
                    segment.source_offset_start(),
                    segment.source_offset_end()
                );
                return None;
            };

            let original = source.with_interval(Interval::new(interval.name(), start, end));
            let mapping = Mapping::new(original, segment.into_target());
            debug!("projected {mapping}");
            Some(mapping)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Region;
    use crate::core::Strand;
    use crate::provider::Segment;

    fn target(name: &str, start: u64, end: u64, strand: Strand) -> Region {
        Region::new(
            Interval::new(name, start, end),
            strand,
            "chromosome",
            "GRCh38",
        )
    }

    fn source(interval: &Interval) -> Region {
        Region::new(interval.clone(), Strand::Positive, "chromosome", "GRCh37")
    }

    #[test]
    fn single_segment_offsets_are_additive() {
        let interval = Interval::new("chr1", 1000, 2000);
        let projection = Projection::new(
            source(&interval),
            vec![Segment::new(
                0,
                999,
                target("chr1", 10, 1009, Strand::Positive),
            )],
        );

        let mappings = project(&interval, projection);
        assert_eq!(mappings.len(), 1);

        let original = mappings[0].original();
        assert_eq!(original.interval(), &Interval::new("chr1", 1000, 1999));
    }

    #[test]
    fn multiple_segments_keep_their_order() {
        let interval = Interval::new("chr1", 1000, 2000);
        let projection = Projection::new(
            source(&interval),
            vec![
                Segment::new(0, 499, target("chr1", 5000, 5499, Strand::Positive)),
                Segment::new(500, 999, target("chr7", 100, 599, Strand::Negative)),
            ],
        );

        let mappings = project(&interval, projection);
        let ranges = mappings
            .iter()
            .map(|m| (m.original().start(), m.original().end()))
            .collect::<Vec<_>>();

        assert_eq!(ranges, vec![(1000, 1499), (1500, 1999)]);
        assert_eq!(mappings[1].mapped().name(), "chr7");
    }

    #[test]
    fn segments_are_not_sorted() {
        let interval = Interval::new("chr1", 1000, 2000);
        let projection = Projection::new(
            source(&interval),
            vec![
                Segment::new(500, 999, target("chr1", 5500, 5999, Strand::Positive)),
                Segment::new(0, 499, target("chr1", 5000, 5499, Strand::Positive)),
            ],
        );

        let mappings = project(&interval, projection);
        assert_eq!(mappings[0].original().start(), 1500);
        assert_eq!(mappings[1].original().start(), 1000);
    }

    #[test]
    fn original_metadata_comes_from_queried_region() {
        let interval = Interval::new("chr1", 1000, 2000);
        let projection = Projection::new(
            source(&interval),
            vec![Segment::new(
                0,
                1000,
                Region::new(
                    Interval::new("scaffold_9", 1, 1001),
                    Strand::Negative,
                    "scaffold",
                    "GRCh38",
                ),
            )],
        );

        let mappings = project(&interval, projection);
        let (original, mapped) = mappings[0].clone().into_parts();

        assert_eq!(original.name(), "chr1");
        assert_eq!(original.strand(), Strand::Positive);
        assert_eq!(original.coord_system(), "chromosome");
        assert_eq!(original.assembly(), "GRCh37");

        assert_eq!(mapped.name(), "scaffold_9");
        assert_eq!(mapped.strand(), Strand::Negative);
        assert_eq!(mapped.coord_system(), "scaffold");
        assert_eq!(mapped.assembly(), "GRCh38");
    }

    #[test]
    fn overflowing_offsets_are_dropped() {
        let interval = Interval::new("chr1", u64::MAX - 1, u64::MAX);
        let projection = Projection::new(
            source(&interval),
            vec![
                Segment::new(0, 5, target("chr1", 1, 6, Strand::Positive)),
                Segment::new(0, 1, target("chr1", 10, 11, Strand::Positive)),
            ],
        );

        let mappings = project(&interval, projection);
        assert_eq!(mappings.len(), 1);
        assert_eq!(
            mappings[0].original().interval(),
            &Interval::new("chr1", u64::MAX - 1, u64::MAX)
        );
        assert_eq!(mappings[0].mapped().start(), 10);
    }

    #[test]
    fn no_segments() {
        let interval = Interval::new("chr1", 1000, 2000);
        let projection = Projection::new(source(&interval), Vec::new());
        assert!(project(&interval, projection).is_empty());
    }
}
