//! Unit tests for dc-core primitives.

#[cfg(test)]
mod direction {
    use crate::Direction::{self, *};

    #[test]
    fn inverse_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.inverse().inverse(), d);
        }
    }

    #[test]
    fn offsets_sum_to_zero_with_inverse() {
        for d in Direction::ALL {
            let (x, y, z) = d.offset();
            let (ix, iy, iz) = d.inverse().offset();
            assert_eq!((x + ix, y + iy, z + iz), (0, 0, 0));
        }
    }

    #[test]
    fn yaw_left_cycle_over_world_down() {
        assert_eq!(North.rotated_left(Down), West);
        assert_eq!(West.rotated_left(Down), South);
        assert_eq!(South.rotated_left(Down), East);
        assert_eq!(East.rotated_left(Down), North);
    }

    #[test]
    fn yaw_right_undoes_yaw_left() {
        for down in Direction::ALL {
            for d in Direction::ALL {
                assert_eq!(d.rotated_left(down).rotated_right(down), d);
            }
        }
    }

    #[test]
    fn four_left_turns_are_identity() {
        for down in Direction::ALL {
            for d in Direction::ALL {
                let r = d
                    .rotated_left(down)
                    .rotated_left(down)
                    .rotated_left(down)
                    .rotated_left(down);
                assert_eq!(r, d);
            }
        }
    }

    #[test]
    fn vertical_directions_unchanged_by_yaw() {
        assert_eq!(Up.rotated_left(Down), Up);
        assert_eq!(Down.rotated_right(Down), Down);
    }

    #[test]
    fn pitch_relative_to_down_reference() {
        assert_eq!(North.pitched_down(Down), Down);
        assert_eq!(North.pitched_up(Down), Up);
        // A spider on the north wall: its "down" is North.
        assert_eq!(Up.pitched_down(North), North);
        assert_eq!(Up.pitched_up(North), South);
    }

    #[test]
    fn planarity_tracks_down_reference() {
        assert!(North.is_planar(Down));
        assert!(!Up.is_planar(Down));
        // On a wall, Up is planar and East is not.
        assert!(Up.is_planar(East));
        assert!(!West.is_planar(East));
    }
}

#[cfg(test)]
mod coords {
    use crate::{Direction, GridPoint, WorldVec};

    #[test]
    fn neighbor_steps_one_cell() {
        let p = GridPoint::new(1, 2, 3);
        assert_eq!(p.neighbor(Direction::North), GridPoint::new(1, 2, 4));
        assert_eq!(p.neighbor(Direction::Down), GridPoint::new(1, 1, 3));
    }

    #[test]
    fn chebyshev_diagonal() {
        let a = GridPoint::ORIGIN;
        let b = GridPoint::new(1, -1, 0);
        assert_eq!(a.chebyshev(b), 1);
        assert_eq!(a.axis_deltas(b), (1, 1, 0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = WorldVec::new(0.0, 0.0, 0.0);
        let b = WorldVec::new(2.0, 4.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), WorldVec::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn planar_distance_ignores_vertical() {
        let a = WorldVec::new(0.0, 0.0, 0.0);
        let b = WorldVec::new(3.0, 10.0, 4.0);
        assert!((a.planar_distance(b) - 5.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod transport {
    use crate::TransportMode;

    #[test]
    fn union_and_contains() {
        let m = TransportMode::WALKING | TransportMode::CLIMBING;
        assert!(m.contains(TransportMode::WALKING));
        assert!(m.contains(TransportMode::CLIMBING));
        assert!(!m.contains(TransportMode::FLYING));
        assert!(m.intersects(TransportMode::CLIMBING | TransportMode::FLYING));
    }

    #[test]
    fn difference_removes_flags() {
        let m = TransportMode::ALL.difference(TransportMode::FLYING);
        assert!(!m.flies());
        assert!(m.contains(TransportMode::SQUEEZING));
    }

    #[test]
    fn empty_set() {
        assert!(TransportMode::NONE.is_empty());
        assert!(!TransportMode::NONE.intersects(TransportMode::ALL));
    }
}

#[cfg(test)]
mod ids {
    use crate::EntityId;

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(EntityId::INVALID.0, u32::MAX);
        assert_eq!(EntityId::default(), EntityId::INVALID);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(10).since(Tick(15)), 0); // saturates
    }
}
