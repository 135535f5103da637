//! Matchup files shared by the unit tests

/// Four teams, six weeks, every team plays every week
pub const FOUR_TEAM_CSV: &str = "\
Week,Team 1 Name,Team 2 Name,Team 1 FG%,Team 2 FG%,Team 1 FT%,Team 2 FT%,Team 1 3PTM,Team 2 3PTM,Team 1 PTS,Team 2 PTS,Team 1 REB,Team 2 REB,Team 1 AST,Team 2 AST,Team 1 ST,Team 2 ST,Team 1 BLK,Team 2 BLK,Team 1 TO,Team 2 TO
1,Team A,Team B,0.45,0.42,0.75,0.78,10,8,95,90,35,38,18,20,7,8,5,4,12,10
1,Team C,Team D,0.41,0.43,0.72,0.74,9,7,83,88,32,36,15,16,5,6,4,5,11,13
2,Team A,Team B,0.46,0.40,0.76,0.71,11,7,102,72,38,27,20,12,8,4,7,3,14,10
2,Team C,Team D,0.44,0.41,0.73,0.75,10,8,95,85,33,32,18,14,9,5,6,4,11,12
3,Team A,Team B,0.47,0.43,0.78,0.73,12,8,97,80,40,32,22,14,9,6,6,4,15,12
3,Team C,Team D,0.45,0.42,0.72,0.74,10,9,88,92,36,35,16,19,7,8,5,5,13,12
4,Team A,Team B,0.48,0.43,0.79,0.73,15,12,110,95,42,38,25,20,12,9,8,7,18,15
4,Team C,Team D,0.42,0.44,0.75,0.77,10,9,92,100,36,40,18,22,8,10,6,7,14,16
5,Team A,Team B,0.47,0.41,0.78,0.75,14,9,105,85,40,32,22,15,10,5,7,4,17,13
5,Team C,Team D,0.43,0.43,0.72,0.77,11,10,92,92,35,36,18,20,8,8,6,6,15,17
6,Team A,Team B,0.49,0.45,0.80,0.77,16,12,112,93,45,38,25,20,12,9,8,7,20,18
6,Team C,Team D,0.46,0.43,0.74,0.74,11,12,98,97,40,38,22,20,10,9,7,7,19,16
";

/// Points and turnovers only. C and D are out by week 4.
pub const TOY_CSV: &str = "\
Week,Team 1 Name,Team 2 Name,Team 1 PTS,Team 2 PTS,Team 1 TO,Team 2 TO
1,A,B,100,90,10,15
1,C,D,95,95,12,11
2,A,C,80,85,9,9
2,B,D,88,70,14,16
3,A,D,90,92,11,13
3,B,C,101,99,12,12
4,A,B,105,100,13,10
";
