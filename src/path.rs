use serde::Serialize;

use crate::error::Result;
use crate::fare::FarePolicy;
use crate::models::{Line, Paths, Station, StationId, SubwayGraph};

/// Everything a rider needs to know about a trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub stations: Vec<Station>,
    pub distance: u32,
    pub fare: u32,
    /// Lines ridden, in riding order
    pub lines: Vec<String>,
    /// Highest surcharge among `lines`, already included in `fare`
    pub surcharge: u32,
}

/// Answers "how do I get from A to B and what does it cost".
///
/// Holds no network state: every query folds the snapshot it is handed into a
/// fresh graph, so concurrent queries never share anything mutable.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    policy: FarePolicy,
}

impl PathFinder {
    /// # Errors
    ///
    /// Returns `InvalidFarePolicy` if `policy` fails [`FarePolicy::validate`].
    pub fn new(policy: FarePolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    #[must_use]
    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Shortest path from `source` to `target` over `lines`, priced for a
    /// rider of `age`
    ///
    /// # Errors
    ///
    /// `SameSourceTarget`, `UnknownStation` or `UnreachablePath`; see
    /// [`Paths::shortest_path`].
    pub fn find_path(&self, lines: &[Line], source: StationId, target: StationId, age: u32) -> Result<PathReport> {
        let network = SubwayGraph::from_lines(lines);
        let route = network.shortest_path(source, target).map_err(|err| {
            log::warn!("Path query {source} -> {target} failed: {err}");
            err
        })?;

        let surcharge = route.max_surcharge();
        let fare = self.policy.calculate_fare(route.distance, surcharge, age);
        let line_names = route.line_names().into_iter().map(str::to_string).collect();
        crate::log!(
            "Path {source} -> {target}: {}km over {} stations, fare {fare}",
            route.distance,
            route.stations.len()
        );

        Ok(PathReport {
            stations: route.stations,
            distance: route.distance,
            fare,
            lines: line_names,
            surcharge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubwayError;
    use crate::fare::Discount;
    use crate::models::{Lines, StationRegistry};

    const ADULT: u32 = 30;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    struct Fixture {
        lines: Lines,
        gangnam: StationId,
        yangjae: StationId,
        gyodae: StationId,
        nambu: StationId,
    }

    fn register(registry: &mut StationRegistry, name: &str) -> Station {
        registry.register(name).expect("new station")
    }

    /// 교대역 --- 2호선 (10) --- 강남역
    ///   |                         |
    /// 3호선 (3)               신분당선 (10)
    ///   |                         |
    /// 남부터미널역 -- 3호선 (2) -- 양재역
    fn create_fixture() -> Fixture {
        let mut registry = StationRegistry::new();
        let gangnam = register(&mut registry, "강남역");
        let yangjae = register(&mut registry, "양재역");
        let gyodae = register(&mut registry, "교대역");
        let nambu = register(&mut registry, "남부터미널역");

        let mut lines = Lines::default();
        lines
            .add(Line::new("신분당선", "bg-red-600", gangnam.clone(), yangjae.clone(), 10).expect("valid line"))
            .expect("free name");
        lines
            .add(Line::new("이호선", "bg-red-600", gyodae.clone(), gangnam.clone(), 10).expect("valid line"))
            .expect("free name");
        let line3 = lines
            .add(Line::new("삼호선", "bg-red-600", gyodae.clone(), yangjae.clone(), 5).expect("valid line"))
            .expect("free name");
        lines
            .insert_section(line3, gyodae.clone(), nambu.clone(), 3)
            .expect("splits 교대-양재");

        let id = |station: &Station| station.id().expect("registered");
        Fixture {
            gangnam: id(&gangnam),
            yangjae: id(&yangjae),
            gyodae: id(&gyodae),
            nambu: id(&nambu),
            lines,
        }
    }

    fn ids(report: &PathReport) -> Vec<StationId> {
        report.stations.iter().filter_map(Station::id).collect()
    }

    #[test]
    fn test_find_path_by_distance() {
        init_logging();
        let fixture = create_fixture();
        let finder = PathFinder::default();

        let report = finder
            .find_path(fixture.lines.as_slice(), fixture.gyodae, fixture.yangjae, ADULT)
            .expect("connected");
        assert_eq!(ids(&report), vec![fixture.gyodae, fixture.nambu, fixture.yangjae]);
        assert_eq!(report.distance, 5);
        assert_eq!(report.fare, 1250);

        let report = finder
            .find_path(fixture.lines.as_slice(), fixture.gangnam, fixture.nambu, ADULT)
            .expect("connected");
        assert_eq!(ids(&report), vec![fixture.gangnam, fixture.yangjae, fixture.nambu]);
        assert_eq!(report.distance, 12);
        assert_eq!(report.fare, 1350);
        assert_eq!(report.lines, vec!["신분당선".to_string(), "삼호선".to_string()]);
    }

    #[test]
    fn test_fare_uses_rider_age() {
        let fixture = create_fixture();
        let finder = PathFinder::default();

        let fare_for = |age| {
            finder
                .find_path(fixture.lines.as_slice(), fixture.gangnam, fixture.nambu, age)
                .expect("connected")
                .fare
        };
        assert_eq!(fare_for(4), 0);
        assert_eq!(fare_for(10), 850);
        assert_eq!(fare_for(15), 1150);
        assert_eq!(fare_for(ADULT), 1350);
    }

    #[test]
    fn test_surcharge_uses_highest_line() {
        let mut registry = StationRegistry::new();
        let a = register(&mut registry, "A");
        let b = register(&mut registry, "B");
        let c = register(&mut registry, "C");

        let lines = vec![
            Line::new("신분당선", "bg-red-600", a.clone(), b.clone(), 4)
                .expect("valid line")
                .with_surcharge(900),
            Line::new("2호선", "bg-green-600", b.clone(), c.clone(), 4)
                .expect("valid line")
                .with_surcharge(100),
        ];

        let report = PathFinder::default()
            .find_path(&lines, a.id().expect("registered"), c.id().expect("registered"), ADULT)
            .expect("connected");
        assert_eq!(report.distance, 8);
        assert_eq!(report.surcharge, 900);
        assert_eq!(report.fare, 1250 + 900);
    }

    #[test]
    fn test_custom_policy() {
        let fixture = create_fixture();
        let policy = FarePolicy::from_json(r#"{"base_fare": 1400}"#).expect("valid policy");
        let finder = PathFinder::new(policy).expect("valid policy");

        let report = finder
            .find_path(fixture.lines.as_slice(), fixture.gyodae, fixture.yangjae, ADULT)
            .expect("connected");
        assert_eq!(report.fare, 1400);
        assert_eq!(finder.policy().base_fare, 1400);
    }

    #[test]
    fn test_new_rejects_unusable_policy() {
        let zero_step = FarePolicy {
            mid_tier_step: 0,
            ..FarePolicy::default()
        };
        assert!(matches!(PathFinder::new(zero_step), Err(SubwayError::InvalidFarePolicy(_))));

        let mut overgenerous = FarePolicy::default();
        overgenerous.age_brackets[1].discount = Discount::Percent {
            percent: 150,
            flat_deduction: 0,
        };
        assert!(matches!(PathFinder::new(overgenerous), Err(SubwayError::InvalidFarePolicy(_))));
    }

    #[test]
    fn test_errors_surface() {
        init_logging();
        let fixture = create_fixture();
        let finder = PathFinder::default();
        let lines = fixture.lines.as_slice();

        assert!(matches!(
            finder.find_path(lines, fixture.gangnam, fixture.gangnam, ADULT),
            Err(SubwayError::SameSourceTarget)
        ));
        assert!(matches!(
            finder.find_path(lines, fixture.gangnam, StationId(404), ADULT),
            Err(SubwayError::UnknownStation(StationId(404)))
        ));
        assert!(matches!(
            finder.find_path(&[], fixture.gangnam, fixture.nambu, ADULT),
            Err(SubwayError::UnknownStation(_))
        ));
    }

    #[test]
    fn test_path_reflects_latest_sections() {
        let mut fixture = create_fixture();
        let finder = PathFinder::default();

        let line3 = fixture
            .lines
            .iter()
            .find(|line| line.name() == "삼호선")
            .and_then(Line::id)
            .expect("registered");
        let nambu = fixture
            .lines
            .get(line3)
            .expect("registered")
            .stations()
            .into_iter()
            .find(|station| station.id() == Some(fixture.nambu))
            .cloned()
            .expect("on line");
        fixture.lines.remove_station(line3, &nambu).expect("interior station");

        let result = finder.find_path(fixture.lines.as_slice(), fixture.gangnam, fixture.nambu, ADULT);
        assert!(matches!(result, Err(SubwayError::UnknownStation(_))));

        let report = finder
            .find_path(fixture.lines.as_slice(), fixture.gyodae, fixture.yangjae, ADULT)
            .expect("connected");
        assert_eq!(report.distance, 5);
        assert_eq!(ids(&report), vec![fixture.gyodae, fixture.yangjae]);
    }
}
