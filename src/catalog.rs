//! Compiled-in catalog of predefined facility locations
//!
//! The catalog is fixed for the lifetime of the process. Names are not
//! unique and several wards share a hospital's coordinates.

use crate::models::Facility;

/// Every predefined facility, in catalog order
pub static FACILITIES: &[Facility] = &[
    Facility::new("CYGNET KEWSTOKE", "123 Main St", 51.365867, -2.964238),
    Facility::new("CYGNET HOSPITAL BURY", "OFF BULLER ST, BOLTON RD, BURY UK", 53.58624, -2.31713),
    Facility::new("CYGNET HOSPITAL COLCHESTER", "BOXED RD, MILE END, COLCHESTER UK", 51.92335, 0.89328),
    Facility::new("CYGNET HOSPITAL WYKE", "BLANKNEY GRANGE, HUDDERSFIELD RD, BRADFORD", 53.72844, -1.77432),
    Facility::new("CYGNET HOSPITAL MAIDSTONE", "GIDDS POND WAY, WEAVERING, MAIDSTONE UK", 51.28233, 0.55847),
    Facility::new("CYGNET HOSPITAL BRUNEL", "Crow Ln, Henbury, Bristol", 51.50948, -2.61768),
    Facility::new("CYGNET HOSPITAL DERBY", "100 London Rd, Derby, UK", 52.9077, -1.45432),
    Facility::new("CYGNET HOSPITAL CLIFTON", "Clifton Ln, Clifton, Nottingham, UK", 52.90875, -1.18391),
    Facility::new("CYGNET HOSPITAL BLACKHEATH", "80-82 Blackheath Hill, Blackheath, London, UK", 51.47243, -0.01068),
    Facility::new("CYGNET HOSPITAL HARROW", "London Rd, Harrow, UK", 51.56706, -0.33759),
    Facility::new("CYGNET ST. TEILO HOUSE", "Goshen Cl, Rhymney, Tredegar, UK", 51.76085, -3.28664),
    Facility::new("CYGNET LODGE KENTON", "74 Kenton Rd, Harrow, UK", 51.58051, -0.31965),
    Facility::new("CYGNET HOSPITAL PADDOCKS", "Wilmere Lane, Widnes", 53.40012, -2.733833),
    Facility::new("CYGNET LEWISHAM LODGE", "123 Main St", 51.452019, -0.012862),
    Facility::new("CYGNET HARROGATE", "23 Ripon Road, Harrogate", 53.999331, -1.547568),
    Facility::new("CYGNET OLDBURY", "Salop Drive, Oldbury", 52.478452, -1.994877),
    Facility::new("CYGNET BEECHES", "Retford Road, South Leverton, Retford, Nottinghamshire", 53.321247, -0.829178),
    Facility::new("CYGNET HOSPITAL WOLVERHAMPTON", "140 Wolverhampton Road, Wolverhampton, West Midlands", 52.59799, -2.088916),
    Facility::new("CYGNET NIELD HOUSE", "Bradfield Rd, Barrows Green, Crewe UK", 53.11782, -2.46625),
    Facility::new("CYGNET HOSPITAL SHEFFIELD", "83 East Bank Road, Sheffield UK", 53.36803, -1.45932),
    Facility::new("CYGNET WOKING", "Redding Way, Knaphill, Woking, UK", 51.3149, -0.61404),
    Facility::new("CYGNET NIGHTINGALE", "46-48 Stourcliffe Ave, Southbourne, Bournemouth, UK", 50.72312, -1.81089),
    Facility::new("CYGNET MAPLE HOUSE", "93 Kneeton Rd, East Bridgford, Nottingham, UK", 52.98543, -0.96553),
    Facility::new("CYGNET DELFRYN WARD", "Argoed Hall Lane, Mold, UK", 53.16799, -3.12503),
    Facility::new("CYGNET BROUGHTON WARD", "High St, Brant Broughton, Lincoln UK", 53.0738, -0.63444),
    Facility::new("CYGNET ST. WILLIAMS", "Cornwall Ave, Darlington, UK", 54.53461, -1.53647),
    Facility::new("CYGNET HOSPITAL STEVENAGE", "Graveley Rd, Stevenage, UK", 51.92794, -0.21409),
    Facility::new("CYGNET APPLETREE", "Back, Frederick St N, Meadowfield, Durham, UK", 54.75076, -1.62051),
    Facility::new("CYGNET PINDER HOUSE", "Upper Sheffield Rd, Barnsley, UK", 53.54267, -1.46764),
    Facility::new("CYGNET CEDARS", "37 Broadway Ave, Birmingham, UK", 52.48166, -1.83555),
    Facility::new("CYGNET GLEDHOLT", "32 Greenhead Rd, Huddersfield, UK", 53.64644, -1.79602),
    Facility::new("CYGNET THE ORCHARD", "Station Rd, Thorrington, Colchester, UK", 51.84367, 1.03102),
    Facility::new("CYGNET LODGE BRUGHHOUSE", "60 Rastrick Common, Rastrick, Brighouse, UK", 53.69428, -1.78561),
    Facility::new("CYGNET ALARCH", "Park Terrace, Merthyr Tydfil", 51.321127, -2.964126),
    Facility::new("ELYSIUM CHESTERFIELD HOUSE", "411 Newark Road, Lincoln", 53.18366, -0.607688),
    Facility::new("ELYSIUM CLIPSTONE HOUSE", "Clipstone House, First Avenue, Clipstone, Nottinghamshire", 53.163458, -1.115965),
    Facility::new("ELYSIUM FIELD HOUSE", "Chesterfield Rd, Shirland, Alfreton", 53.098841, -1.390792),
    Facility::new("ELYSIUM HEALTHLINC APARTMENTS", "Cliff Road, Welton, Lincolnshire", 53.306084, -0.490114),
    Facility::new("ELYSIUM AVONFIELD NEUROLOGICAL CENTRE", "Avonfield Neurological Centre, 290 Station Road, Knuston, Wellingborough", 52.286237, -0.624439),
    Facility::new("ELYSIUM THE COTTAGE", "31 Norbeck Lane, Lincoln", 53.304709, -0.487326),
    Facility::new("ELYSIUM THE FARNDON UNIT", "Farndon Road, Newark, Nottinghamshire", 53.066044, -0.83227),
    Facility::new("ELYSIUM THE LIMES", "The Limes, Main Street, Langwith, Mansfield, Nottinghamshire", 53.232217, -1.205352),
    Facility::new("ELYSIUM TOTTLE BROOK HOUSE", "Tottle Brook House, Calverton Drive, Nottingham", 52.978502, -1.225502),
    Facility::new("ELYSIUM ADDERLEY GREEN", "Dividy Road, Stoke-On-Trent, Staffordshire", 53.002705, -2.121448),
    Facility::new("ELYSIUM BADBY PARK", "Badby Road West, Daventry, Northamptonshire", 52.246658, -1.175337),
    Facility::new("ELYSIUM BALLINGTON HOUSE", "Ballington Gardens, Leek, Staffordshire", 53.103021, -2.021736),
    Facility::new("ELYSIUM BROOK HOUSE", "Brook House, Station Road, Broadway, Worcestershire", 52.040438, -1.869854),
    Facility::new("ELYSIUM COTSWOLD SPA HOSPITAL", "Cotswold Spa, Station Road, Broadway, Worcestershire", 52.040438, -1.869854),
    Facility::new("ELYSIUM STANLEY HOUSE & BOWLEY COURT", "Bosbury, Hereford, Herefordshire", 52.085718, -2.461053),
    Facility::new("ELYSIUM MOORLANDS NEUROLOGICAL CENTRE", "Moorlands Neurological Centre, Lockwood Road, Cheadle, Staffordshire", 53.000281, -1.962469),
    Facility::new("ELYSIUM THE WOODLANDS", "20 Woodland Avenue, Wolstanton, Newcastle Under Lyme", 53.03272, -2.221382),
    Facility::new("ELYSIUM SPRING HOUSE", "Spring House, Matford Road, Exeter", 50.717664, -3.517024),
    Facility::new("ELYSIUM PINHOE VIEW", "Pinhoe View, College Way, Exeter, Devon", 50.731263, -3.469214),
    Facility::new("ELYSIUM THE AVALON CENTRE", "The Avalon Centre, Edison Park, Hindle Way, Swindon, Wiltshire", 51.557195, -1.731115),
    Facility::new("ELYSIUM THE COPSE", "The Copse, Beechmount Close, Oldmixon, Weston-super-Mare, Somerset", 51.321127, -2.964126),
    Facility::new("ELYSIUM THE DEAN NEUROLOGICAL CENTRE", "The Dean Neurological Centre, Tewkesbury Road, Gloucester", 51.880048, -2.239392),
    Facility::new("ELYSIUM THE WOODMILL", "The Woodmill, Exeter Road, Cullompton, Devon", 50.847373, -3.394716),
    Facility::new("ELYSIUM WELLESLEY", "Westpark 26, Chelston, Wellington, Somerset", 50.978961, -3.205618),
    Facility::new("ELYSIUM ABERBEEG", "Aberbeeg Hospital, Pendarren Road, Aberbeeg, Abertillery", 51.707378, -3.14975),
    Facility::new("ELYSIUM ADERYN", "Penperlleni, Nr Pontypool, Monmouthshire, Wales", 51.735642, -2.982887),
    Facility::new("ELYSIUM CEFN CARNAU", "Cefn Carnau Lane, Thornhill, Cardiff, South Wales", 51.556889, -3.210069),
    Facility::new("ELYSIUM REENE HOUSE", "Reene House, Reene Court, Lliswerry, Newport, Wales", 51.580688, -2.961615),
    Facility::new("ELYSIUM TY GLYN EBWY", "TÅ· Glyn Ebwy, Hillside, Ebbw Vale, Blaenau, Gwent", 51.77465, -3.209118),
    Facility::new("ELYSIUM TY GROSVENOR", "16 Grosvenor Road, Wrexham, Wales", 53.048576, -2.996915),
    Facility::new("ELYSIUM TY GWYN HALL", "Llantilio Pertholey, Abergavenny, Monmouthshire, Wales", 51.841987, -3.004711),
    Facility::new("ELYSIUM TYDFIL HOUSE", "Tydfil House, 46 Merthyr Rd, Abergavenny", 51.823226, -3.025115),
    Facility::new("NEUVEN BIRNBECK HOUSE", "2 St Paul's Road, Weston-super-Mare", 51.337154, -2.974144),
    Facility::new("NEUVEN APPLEY CLIFF", "Appley Cliff, Popham Road, Shanklin", 50.624841, -1.175553),
    Facility::new("NEUVEN ST CECILIA'S", "32 Sundridge Avenue, Bromley", 51.410013, 0.039039),
    Facility::new("NEUVEN LEONARD CHESHIRE - NEWHAVEN ROAD", "161-163 Newhaven Road, Edinburgh", 55.976039, -3.193087),
    Facility::new("NEUVEN LEONARD CHESHIRE - ALEMOOR", "17 Alemoor Crescent, Edinburgh", 55.964615, -3.156706),
    Facility::new("NEUVEN LEONARD CHESHIRE - WARDIEBURN", "4 Wardieburn Street East, Edinburgh", 55.977576, -3.225057),
    Facility::new("NEUVEN WHARFEDALE HOUSE", "16 Wharfedale Lawns, Wetherby", 53.929179, -1.388136),
    Facility::new("NEUVEN MID SHIRES SUPPORTED LIVING SERVICE", "Room 9 & 10 Dombey Court, The Pilgrim Centre, Brickhill Drive, Bedford", 52.150112, -0.458966),
    Facility::new("NEUVEN ILEX CLOSE", "Ilex Close, Rustington, Littlehampton", 50.805843, -0.503728),
    Facility::new("NEUVEN RADFORD CLOSE", "Radford Close, Offerton, Stockport", 53.395885, -2.115812),
    Facility::new("NEUVEN MOTE LODGE", "Mote Lodge, High Street, Staplehurst, Tonbridge", 51.180728, 0.52155),
    Facility::new("NEUVEN EFFINGHAM LANE", "Effingham Lane, Copthorne, Crawley", 51.11424, -0.092138),
    Facility::new("NEUVEN NEWCASTLE ROAD", "Newcastle Road, Sandbach", 53.148105, -2.366149),
    Facility::new("NEUVEN WOOLTON ROAD", "Woolton Road, Liverpool", 53.372334, -2.855824),
    Facility::new("NEUVEN STADON ROAD", "42 Stadon Road, Anstey, Leicester", 52.657248, -1.201121),
    Facility::new("NEUVEN ST ANDREWS WAY", "3 St Andrews Way, Deans, Livingston", 55.887186, -3.511367),
    Facility::new("NEUVEN LLANHENNOCK", "Llanhennock, Caerleon, Newport", 51.616313, -2.93319),
    Facility::new("NEUVEN GREENACRES", "Greenacres Bow Arrow Lane, Dartford", 51.446648, 0.223953),
    Facility::new("NEUVEN PORTOBELLO", "Portobello, Edinburgh", 55.95058, -3.11491),
    Facility::new("NEUVEN LUCAS LANE", "Lucas Lane, Hitchin", 51.94786, -0.278153),
    Facility::new("NEUVEN KNOCKBREDA ROAD", "126 Upper Knockbreda Road, Belfast", 54.563023, -5.868088),
    Facility::new("NEUVEN NESS WALK", "Ness Walk, Inverness", 57.477682, -4.224999),
    Facility::new("NEUVEN CLOCK BARN LANE", "Clock Barn Lane, Godalming", 51.183312, -0.616975),
    Facility::new("NEUVEN LONG ROCK", "Long Rock, Penzance", 50.117542, -5.537028),
    Facility::new("NEUVEN LAVENDER FIELDS", "2 Lavender Fields, Lucas Lane, Hitchin", 51.94786, -0.278153),
    Facility::new("NEUVEN ARGYLE STREET", "7/9 Argyle Street, Edinburgh", 55.97644, -3.200136),
    Facility::new("NEUVEN KIRKLANDS PARK RIGG", "2 Kirklands Park Rigg, Kirkliston", 55.95869, -3.410451),
    Facility::new("NEUVEN FREELANDS ROAD", "69 Freelands Road, Bromley", 51.401246, 0.046893),
    Facility::new("NEUVEN WARWICK ROAD", "Warwick Road, Banbury", 52.051627, -1.335558),
    Facility::new("NEUVEN BLAIR AVENUE", "Blair Avenue, Glenrothes", 56.20367, -3.189162),
    Facility::new("NEUVEN FARNCOMBE ROAD", "9 Farncombe Road, Worthing", 50.8144, -0.378201),
    Facility::new("NEUVEN FOURACRES", "Fouracres, Woodgates Lane, North Ferriby", 53.71691, -0.501929),
    Facility::new("NEUVEN PEMBURY ROAD", "Pembury Road, Tunbridge Wells", 51.167321, 0.268894),
    Facility::new("NEUVEN CHURCH ROAD", "Church Road, Brampton, Huntingdon", 52.31599, -0.168132),
    Facility::new("NEUVEN QUANTOK ROAD", "15 Quantock Road, Weston-super-Mare", 51.340339, -2.975939),
    Facility::new("NEUVEN CHARLTON LANE", "Charlton Lane, Leckhampton, Cheltenham", 51.867308, -2.077267),
    Facility::new("NEUVEN COLLEGE ROAD", "138 College Road, London", 51.473186, -0.181634),
    Facility::new("NEUVEN WORTHINGTON CLOSE", "Worthington Close, Crook", 54.634507, -1.564149),
    Facility::new("NEUVEN BANSTEAD ROAD", "17 Banstead Road, Ewell, Epsom", 51.352506, -0.265175),
    Facility::new("NEUVEN HALL ROAD", "Hall Road, Great Bromley, Colchester", 51.938071, 0.944124),
    Facility::new("NEUVEN BRADBURY WING", "The Bradbury Wing, Roseberry Crescent, Jesmond, Newcastle upon Tyne", 54.992189, -1.582091),
    Facility::new("NEUVEN VESEY ROAD", "39 Vesey Road, Sutton Coldfield", 52.586503, -1.826905),
    Facility::new("NEUVEN ALMA ROAD", "42 Alma Road, Reigate", 51.240191, -0.203195),
    Facility::new("NEUVEN MAPLE ROAD", "10 Maple Road, Penge, London", 51.403594, -0.051743),
    Facility::new("NEUVEN KING STREET", "61/63 King Street, Sileby, Loughborough", 52.724268, -1.103354),
    Facility::new("NEUVEN LODGE ROAD", "Lodge Road, Kingswood, Bristol", 51.42512, -2.478376),
    Facility::new("NEUVEN MAIN STREET", "Main Street, Netherseal, Swadlincote", 52.678413, -1.540186),
    Facility::new("NEUVEN BLACKADDER PLACE", "1/7 Blackadder Place, Edinburgh", 55.956582, -3.18775),
    Facility::new("NEUVEN FRYERS CLOSE", "Fryers Close, Botley Road, Romsey", 50.991882, -1.497607),
    Facility::new("NEUVEN PEMBURY ROAD", "Pembury Road Tunbridge Wells post town, Kent", 51.167321, 0.268894),
    Facility::new("NEUVEN RADFORD CLOSE", "Radford Close Offerton, Stockport, Greater Manchester", 53.395885, -2.115812),
    Facility::new("NEUVEN LODGE ROAD", "Lodge Road, Bristol, South Gloucestershire", 51.45343, -2.562419),
    Facility::new("NEUVEN SOROGOLD CLOSE", "22 Sorogold Close, Merseyside", 53.475847, -2.892222),
    Facility::new("NEUVEN ST JOHNS ROAD", "17 St Johns Rd, Arlesey", 52.029973, -0.293576),
    Facility::new("NEUVEN ALMA ROAD", "42 Alma Rd Reigate Surrey", 51.240191, -0.203195),
    Facility::new("NEUVEN CANDLEFORD ROAD", "1a Candleford Road, Off Palatine Road, Didsbury", 53.441145, -2.22735),
    Facility::new("NEUVEN GIBFIELD ROAD", "Gibfield Road, Colne, Lancashire", 53.857905, -2.179775),
    Facility::new("NEUVEN MARINE PARADE", "Marine Parade, Dovercourt, Harwich, Essex", 51.938266, 1.27416),
    Facility::new("NEUVEN MURFORD AVENUE", "15 Murford Avenue, Bristol", 51.467896, -2.609863),
    Facility::new("NEUVEN WORKINGTON", "Workington, Cumbria", 54.646388, -3.558343),
    Facility::new("NEUVEN GILBERT SCOTT ROAD", "Gilbert Scott Rd, South Horrington Village, Wells", 51.210046, -2.642765),
    Facility::new("NEUVEN ANSDELL ROAD", "18 Ansdell Rd S, Lytham Saint Annes", 53.737832, -2.976831),
    Facility::new("NEUVEN BURTON ROAD", "Burton Rd, Acresford, Swadlincote", 52.723911, -1.546057),
    Facility::new("NEUVEN PARBOLD", "Parbold, Wigan", 53.601179, -2.79924),
    Facility::new("NEUVEN BLUEBELL CLOSE", "140 Bluebell Close, Beacon Lough, Gateshead", 54.955951, -1.589972),
    Facility::new("NEUVEN LONG CAUSEWAY", "Long Causeway, Exmouth, Devon", 50.62201, -3.394106),
    Facility::new("NEUVEN ORCHARD LANE", "Orchard Lane, null, Crewkerne, Somerset", 50.867189, -2.78865),
    Facility::new("NHS CHERRY WARD", "BOWMERE HOSPITAL, LIVERPOOL ROAD, CHESTER", 53.211544, -2.898825),
    Facility::new("NHS JUNIPER WARD", "BOWMERE HOSPITAL, LIVERPOOL ROAD, CHESTER", 53.211544, -2.898825),
    Facility::new("NHS BEECH WARD", "BOWMERE HOSPITAL, LIVERPOOL ROAD, CHESTER", 53.211544, -2.898825),
    Facility::new("NHS WILLOW WARD", "BOWMERE HOSPITAL, LIVERPOOL ROAD, CHESTER", 53.211544, -2.898825),
    Facility::new("NHS CORAL WARD", "BOWMERE HOSPITAL, LIVERPOOL ROAD, CHESTER", 53.211544, -2.898825),
    Facility::new("NHS GREENWAYS", "Rosemount, Lea Bank Close, Chester Road, Greenways, Macclesfield", 53.260823, -2.146286),
    Facility::new("NHS INDIGO WARD", "ANCORA HOUSE, LIVERPOOL RD., CHESTER", 53.211544, -2.898825),
    Facility::new("NHS MEADOWBANK WARD", "SPRINGVIEW, CLATTERBRIDGE RD., BEBINGTON", 53.332283, -3.025848),
    Facility::new("NHS OLD HALL SURGERY", "Old Hall Surgery, 26 Stanney Lane, Ellesmere Port, Cheshire", 53.276214, -2.904396),
    Facility::new("NHS RIVERWOOD", "SPRINGVIEW, CLATTERBRIDGE RD., BEBINGTON", 53.332283, -3.025848),
    Facility::new("NHS SILK WARD", "Silk Ward Macclesfield District Hospital, Victoria Road, Macclesfield, Cheshire", 53.262321, -2.141074),
    Facility::new("NHS MULBERRY WARD", "Leighton Hospital Middlewich Road, Mulberry Ward Victoria Road, Macclesfield, Cheshire", 53.263065, -2.150297),
    Facility::new("NHS WELLSPRINGS HOSPITAL SITE", "Wellsprings Hospital Site Cheddon Road Taunton, Rydon Ward 1", 51.032894, -3.101928),
    Facility::new("NHS MINEHEAD COMMUNITY HOSPITAL", "Luttrell Way, Minehead, Somerset", 51.200109, -3.461912),
    Facility::new("NHS MUSGROVE PARK HOSPITAL", "Parkfield Dr in Taunton", 51.011569, -3.121702),
    Facility::new("NHS YEOVIL HOSPITAL", "Higher Kingston, Yeovil, Somerset", 50.944843, -2.634712),
    Facility::new("NHS ROWAN WARD 1", "Rowan ward 1 and 2 Summerlands Hospital Site 56 Preston Road Yeovil", 50.946541, -2.648116),
    Facility::new("NHS BRIDGWATER COMMUNITY HOSPITAL", "Bower Lane, Bridgwater, Somerset", 51.140557, -2.974132),
    Facility::new("NHS BURNHAM ON SEA WAR MEMORIAL HOSP.", "6 Love Lane, Burnham-On-Sea, Somerset", 51.238794, -2.993884),
    Facility::new("NHS RYDAL UNIT, WHISTON HOSPITAL", "Warrington Road, Prescot, Merseyside", 53.420469, -2.784954),
];
