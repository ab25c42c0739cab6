//! Built-in population table.
//!
//! Names follow the spelling of the case feed (federal states by plain name,
//! independent cities with the `SK` prefix). Figures are residents as of
//! 2019-12-31.

pub(crate) static POPULATION_TABLE: &[(&str, i64)] = &[
    ("Deutschland", 83_166_711),
    // Federal states
    ("Baden-Württemberg", 11_100_394),
    ("Bayern", 13_124_737),
    ("Berlin", 3_669_491),
    ("Brandenburg", 2_521_893),
    ("Bremen", 681_202),
    ("Hamburg", 1_847_253),
    ("Hessen", 6_288_080),
    ("Mecklenburg-Vorpommern", 1_608_138),
    ("Niedersachsen", 7_993_608),
    ("Nordrhein-Westfalen", 17_947_221),
    ("Rheinland-Pfalz", 4_093_903),
    ("Saarland", 986_887),
    ("Sachsen", 4_071_971),
    ("Sachsen-Anhalt", 2_194_782),
    ("Schleswig-Holstein", 2_903_773),
    ("Thüringen", 2_133_378),
    // Districts and independent cities
    ("Region Hannover", 1_157_624),
    ("Regionalverband Saarbrücken", 329_708),
    ("StädteRegion Aachen", 555_465),
    ("SK Augsburg", 296_582),
    ("SK Bielefeld", 334_195),
    ("SK Bochum", 365_587),
    ("SK Bonn", 329_673),
    ("SK Braunschweig", 249_406),
    ("SK Bremen", 567_559),
    ("SK Chemnitz", 246_334),
    ("SK Dortmund", 588_250),
    ("SK Dresden", 556_780),
    ("SK Duisburg", 498_686),
    ("SK Düsseldorf", 621_877),
    ("SK Erfurt", 213_981),
    ("SK Essen", 582_760),
    ("SK Frankfurt am Main", 763_380),
    ("SK Freiburg i.Breisgau", 231_195),
    ("SK Gelsenkirchen", 259_645),
    ("SK Hagen", 188_686),
    ("SK Halle", 238_762),
    ("SK Karlsruhe", 312_060),
    ("SK Kassel", 202_137),
    ("SK Kiel", 246_794),
    ("SK Köln", 1_087_863),
    ("SK Krefeld", 227_050),
    ("SK Leipzig", 593_145),
    ("SK Lübeck", 216_277),
    ("SK Magdeburg", 237_565),
    ("SK Mainz", 218_578),
    ("SK Mannheim", 310_658),
    ("SK Mönchengladbach", 261_454),
    ("SK München", 1_484_226),
    ("SK Münster", 315_293),
    ("SK Nürnberg", 518_370),
    ("SK Potsdam", 180_334),
    ("SK Rostock", 209_191),
    ("SK Stuttgart", 635_911),
    ("SK Wiesbaden", 278_474),
    ("SK Wuppertal", 355_100),
];
