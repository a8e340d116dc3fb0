pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_candidate_builder::*;

pub mod place_candidate_builder {

    use super::*;
    use crate::{geo::*, place::*};

    #[derive(Debug)]
    pub struct PlaceCandidateBuild {
        place: PlaceCandidate,
    }

    impl PlaceCandidateBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.place.full_name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn lat_lng(mut self, lat: f64, lng: f64) -> Self {
            self.place.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn finish(self) -> PlaceCandidate {
            self.place
        }
    }

    impl Builder for PlaceCandidate {
        type Build = PlaceCandidateBuild;
        fn build() -> Self::Build {
            PlaceCandidateBuild {
                place: PlaceCandidate {
                    full_name: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                },
            }
        }
    }
}
