use difference::Changeset;

use sokosearch::config::Strategy;
use sokosearch::level::Level;
use sokosearch::{LoadLevel, Solve};

fn assert_listing(level_path: &str, strategy: Strategy, max_depth: u32, expected: &str) {
    let level = level_path.load_level().unwrap();
    let solution = level.solve(strategy, max_depth, false);
    let listing = solution.listing().to_string();
    if listing != expected {
        let changeset = Changeset::new(expected, &listing, "\n");
        panic!(
            "solution listing for {} with {} differs from the expected one:\n{}",
            level_path, strategy, changeset
        );
    }
}

#[test]
fn chamber_bfs() {
    let expected = r"0,861B893EBB7EF231F437EB1CFAC42DDF,none,none,0,0.00,0.00,0.00
1,3671D7908551B84C58CDAC1D97E617F0,0,u,1,1.00,0.00,1.00
5,2678AE9343380349F5896783CFE472D7,1,R,2,2.00,0.00,2.00
18,AA2D6E22B28E45EBEA2B4BFE8CA67701,5,d,3,3.00,0.00,3.00
43,E22016944BBDF0F89E43FA45F15B87B2,18,r,4,4.00,0.00,4.00
100,1D14326DDA84CC7C53910CF80C742560,43,U,5,5.00,0.00,5.00
179,0B2DE80861B2E91ABE0920015E64D648,100,l,6,6.00,0.00,6.00
311,E6EDC5A114B702A7A1A469F5D41BE4B7,179,l,7,7.00,0.00,7.00
501,3974FE07BCE658CA6B643900BF2E8609,311,L,8,8.00,0.00,8.00
742,173EAF99A8C7BA0AE186423CD81100B7,501,d,9,9.00,0.00,9.00
1081,8E00D1CA6251679016E0F17BD6D7378F,742,l,10,10.00,0.00,10.00
1530,F55FC632C3DCA4707E50C3B7D6062D12,1081,U,11,11.00,0.00,11.00
";
    assert_listing("levels/chamber.txt", Strategy::Bfs, 12, expected);

    let level = "levels/chamber.txt".load_level().unwrap();
    let solution = level.solve(Strategy::Bfs, 12, false);
    assert_eq!(solution.stats.total_created(), 2029);
    assert_eq!(solution.stats.total_unique_visited(), 720);
    assert_eq!(solution.stats.total_reached_duplicates(), 810);
    assert_eq!(solution.stats.total_pruned(), 0);
}

#[test]
fn chamber_uc_matches_bfs() {
    // all actions cost 1, so uniform cost orders nodes exactly like bfs
    let level = "levels/chamber.txt".load_level().unwrap();
    let bfs = level.solve(Strategy::Bfs, 12, false);
    let uc = level.solve(Strategy::Uc, 12, false);
    assert_eq!(bfs.listing().to_string(), uc.listing().to_string());
    assert_eq!(bfs.stats, uc.stats);
}

#[test]
fn chamber_astar() {
    let expected = r"0,861B893EBB7EF231F437EB1CFAC42DDF,none,none,0,0.00,4.00,4.00
2,277AD40FB00BE8850EF07B27DCD1FAA7,0,r,1,1.00,4.00,5.00
8,48C05D7A486367E112ABC4875B5DBC26,2,U,2,2.00,3.00,5.00
22,F4B66D21EDA237DD53C4C1E5A29A4C6E,8,l,3,3.00,3.00,6.00
62,FCDF7874D1F2766AC2FCE7C001213306,22,L,4,4.00,2.00,6.00
81,35188241EFBC160FEB9B993A3EBB5C0F,62,d,5,5.00,2.00,7.00
162,72E14870D989BF12EE709C51D48306A2,81,l,6,6.00,2.00,8.00
234,320CAEE3BB067F546B55C226569905FD,162,U,7,7.00,1.00,8.00
279,8F3E1E21E8A798638E1C8F03D37AAF6B,234,r,8,8.00,1.00,9.00
386,0FC141C4636699E509FD220A9FB6EDFD,279,u,9,9.00,1.00,10.00
560,EE5C9FF8C700A00BF345E7FF8025BA25,386,r,10,10.00,1.00,11.00
789,ADBC1D41DA6B7931456532FC4E8C674A,560,R,11,11.00,0.00,11.00
";
    assert_listing("levels/chamber.txt", Strategy::AStar, 12, expected);

    let level = "levels/chamber.txt".load_level().unwrap();
    let solution = level.solve(Strategy::AStar, 12, false);
    assert_eq!(solution.stats.total_created(), 883);
    assert_eq!(solution.stats.total_unique_visited(), 309);
    assert_eq!(solution.stats.total_reached_duplicates(), 310);
}

#[test]
fn chamber_greedy() {
    let expected = r"0,861B893EBB7EF231F437EB1CFAC42DDF,none,none,0,0.00,4.00,4.00
1,3671D7908551B84C58CDAC1D97E617F0,0,u,1,1.00,4.00,4.00
5,2678AE9343380349F5896783CFE472D7,1,R,2,2.00,3.00,3.00
9,AA2D6E22B28E45EBEA2B4BFE8CA67701,5,d,3,3.00,3.00,3.00
18,E22016944BBDF0F89E43FA45F15B87B2,9,r,4,4.00,3.00,3.00
124,1D14326DDA84CC7C53910CF80C742560,18,U,5,5.00,2.00,2.00
127,0B2DE80861B2E91ABE0920015E64D648,124,l,6,6.00,2.00,2.00
133,E6EDC5A114B702A7A1A469F5D41BE4B7,127,l,7,7.00,2.00,2.00
142,3974FE07BCE658CA6B643900BF2E8609,133,L,8,8.00,1.00,1.00
145,173EAF99A8C7BA0AE186423CD81100B7,142,d,9,9.00,1.00,1.00
151,8E00D1CA6251679016E0F17BD6D7378F,145,l,10,10.00,1.00,1.00
160,F55FC632C3DCA4707E50C3B7D6062D12,151,U,11,11.00,0.00,0.00
";
    assert_listing("levels/chamber.txt", Strategy::Greedy, 12, expected);

    let level = "levels/chamber.txt".load_level().unwrap();
    let solution = level.solve(Strategy::Greedy, 12, false);
    assert_eq!(solution.stats.total_created(), 162);
    assert_eq!(solution.stats.total_unique_visited(), 56);
    assert_eq!(solution.stats.total_reached_duplicates(), 48);
    assert_eq!(solution.stats.total_pruned(), 15);
}

#[test]
fn chamber_dfs_exhausts_the_depth_limit() {
    assert_listing("levels/chamber.txt", Strategy::Dfs, 12, "NO SOLUTION\n");

    let level = "levels/chamber.txt".load_level().unwrap();
    let solution = level.solve(Strategy::Dfs, 12, false);
    assert_eq!(solution.stats.total_created(), 797);
    assert_eq!(solution.stats.total_unique_visited(), 277);
    assert_eq!(solution.stats.total_reached_duplicates(), 210);
    assert_eq!(solution.stats.total_pruned(), 310);
}

#[test]
fn chamber_needs_eleven_pushes() {
    // the shortest solution has 11 actions, so searches capped at 8 fail
    assert_listing("levels/chamber.txt", Strategy::Bfs, 8, "NO SOLUTION\n");

    let level = "levels/chamber.txt".load_level().unwrap();
    let solution = level.solve(Strategy::Bfs, 8, false);
    assert_eq!(solution.stats.total_created(), 659);
    assert_eq!(solution.stats.total_unique_visited(), 231);
    assert_eq!(solution.stats.total_reached_duplicates(), 206);
    assert_eq!(solution.stats.total_pruned(), 222);
}

#[test]
fn open_row_bfs() {
    // no walls at all - the search leaves the mapped row in every direction
    let expected = r"0,B0CFA396F1D7473E6B063E20D261D710,none,none,0,0.00,0.00,0.00
2,0C631E8561C930710F4D05B431D78218,0,r,1,1.00,0.00,1.00
10,505AF054B44F99E818A604A9F61A7CC2,2,R,2,2.00,0.00,2.00
34,3640644A68D96D87B677393363543E8D,10,R,3,3.00,0.00,3.00
";
    assert_listing("levels/open-row.txt", Strategy::Bfs, 3, expected);

    let level = "levels/open-row.txt".load_level().unwrap();
    let solution = level.solve(Strategy::Bfs, 3, false);
    assert_eq!(solution.stats.total_created(), 53);
    assert_eq!(solution.stats.total_unique_visited(), 13);
    assert_eq!(solution.stats.total_reached_duplicates(), 8);
    assert_eq!(solution.stats.total_pruned(), 13);
}

#[test]
fn open_row_dfs() {
    let expected = r"0,B0CFA396F1D7473E6B063E20D261D710,none,none,0,0.00,0.00,1.00
2,0C631E8561C930710F4D05B431D78218,0,r,1,1.00,0.00,0.50
54,505AF054B44F99E818A604A9F61A7CC2,2,R,2,2.00,0.00,0.33
58,3640644A68D96D87B677393363543E8D,54,R,3,3.00,0.00,0.25
";
    assert_listing("levels/open-row.txt", Strategy::Dfs, 5, expected);

    let level = "levels/open-row.txt".load_level().unwrap();
    let solution = level.solve(Strategy::Dfs, 5, false);
    assert_eq!(solution.stats.total_created(), 77);
    assert_eq!(solution.stats.total_unique_visited(), 19);
    assert_eq!(solution.stats.total_reached_duplicates(), 11);
    assert_eq!(solution.stats.total_pruned(), 40);
}

#[test]
fn parse_errors_are_printable() {
    // the error type has no public name - callers get it through Level's FromStr impl
    let err = "###".parse::<Level>().err().unwrap();
    assert_eq!(err.to_string(), "No player");
}

#[test]
fn repeated_runs_are_identical() {
    let level = "levels/chamber.txt".load_level().unwrap();
    let first = level.solve(Strategy::AStar, 12, false);
    let second = level.solve(Strategy::AStar, 12, false);
    assert_eq!(first.listing().to_string(), second.listing().to_string());
    assert_eq!(first.stats, second.stats);
}
