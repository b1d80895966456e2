//! Static word lists.
//!
//! Entries are upper-case. Callers that match normalized (lower-case) text
//! lower-case them once at load time.

/// Tokens that never contribute to a base molecule name.
pub const STOPWORDS: &[&str] = &[
    "ACETATED", "ACID", "ACIDS", "ADULT", "AGENT", "AGENTS", "AMPOULE", "AMPUL", "AMPULE",
    "AND", "ANTISEPTIC", "APPROX", "APPROXIMATELY", "AQUEOUS", "AS", "ATTENUATED", "BAG",
    "BALANCED", "BASED", "BIPHASIC", "BLUE", "BOTTLE", "BOTTLES", "BOX", "BOXES", "CAN", "CANS",
    "CAPSULE", "CAPSULES", "CARE", "CARPULE", "CARTRIDGE", "CELL", "CHEWABLE", "CHICK",
    "CLEANSER", "COATED", "COMBI", "COMPLEX", "CONCENTRATE", "CONTAINER", "CONTENT", "COUNT",
    "CREAM", "DEGRADED", "DERIVATIVE", "DIABETES", "DIALYSATE", "DIALYSIS", "DIBASIC",
    "DILUENT", "DILUTION", "DOSE", "DOSES", "DROP", "DROPS", "DRUGS", "DRUM", "DURING",
    "DURULES", "EFFERVESCENT", "ELEMENT", "ELEMENTAL", "ELEMENTS", "EMBRYO", "EQUINE", "EQUIV",
    "EQUIV.", "EQUIVALENT", "EYE DROPS", "FAT-SOLUBLE", "FEVER", "FILLED", "FLUID", "FOR",
    "FORMING", "FORMULA", "FORMULATION", "FREE", "GALLON", "GAS", "GEL", "GLASS", "HAS",
    "HEMODIALYSIS", "HEPATIC", "HEPATITIS", "HIGH", "HUMAN", "HYPERTONIC", "IN", "INACTIVATED",
    "INFANTS", "INFUSION", "INFUSIONS", "INJECTABLE", "INJECTION", "INJECTIONS",
    "INTRAMUSCULAR", "INTRAVENOUS", "IRRIGATING", "IRRIGATION", "ISOPHANE", "JELLY", "JUNIOR",
    "KCAL", "LACTATED", "LIPID", "LIQUID", "LIVE", "LOTION", "LYOPHILIZED", "MAINTENANCE", "MC",
    "MEDICATED", "MEDICINES", "METERED", "MICRONUTRIENT", "MILLION", "MIXTURE", "MODIFIED",
    "MONOBASIC", "MONODOSE", "MULTI", "MULTIDOSE", "MULTIPLE", "NACL", "NASAL", "NEBULE",
    "NEEDLE", "NONE", "NORMAL", "NOT", "NUTRITION", "OF", "OINTMENT", "OPHTHALMIC", "OR",
    "ORAL", "PACK", "PAINT", "PARENTERAL", "PATCH", "PEDIA", "PEDIATRIC", "PER", "PERCENT",
    "PETROLEUM", "PLAIN", "PLASTIC", "PLUS", "POUCH", "POWDER", "POWDERS", "PRE", "PRE FILLED",
    "PRE-FILLED", "PREPARATION", "PURIFIED", "RATIO", "RECOMBINANT", "RECTAL", "REGULAR",
    "REHYDRATION", "RELEASE", "RENAL", "REPLACEMENT", "RESPIRATORY", "ROSE", "SACHET",
    "SACHETS", "SALINE", "SALT", "SALTS", "SERUM", "SINGLE", "SKIN", "SOFT", "SOFTGEL",
    "SOFTGELS", "SOLN", "SOLUBLE", "SOLUTION", "SOLUTIONS", "SOLVENT", "SPINAL", "SPRAY",
    "STANDARD", "STERILE", "SUBCUTANEOUS", "SURGICAL", "SUSPENSION", "SYRINGE", "SYRUP",
    "TABLET", "TABLETS", "THAN", "THIS", "TO", "TOPICAL", "TRACE", "TUBE", "TUBES", "UNIT",
    "UNITS", "VAGINAL", "VEHICLE", "VIAL", "VIALS", "VITAMIN", "VITAMINS", "W", "W/", "WATER",
    "WATER-SOLUBLE", "WITH", "WITHOUT", "YELLOW",
];

/// Salt, hydrate and release-modifier suffixes.
pub const SALT_TOKENS: &[&str] = &[
    "ACETATE", "ACETONIDE", "ALUMINIUM", "ALUMINUM", "AMMONIUM", "ANHYDROUS", "ASCORBATE",
    "AXETIL", "BARIUM", "BENZATHINE", "BENZOATE", "BESILATE", "BESYLATE", "BICARBONATE",
    "BISULFATE", "BITARTRATE", "BROMIDE", "BUTYRATE", "CALCIUM", "CARBONATE", "CHLORIDE",
    "CITRATE", "CLAVULANATE", "COPPER", "CR", "DECANOATE", "DIACETATE", "DIHYDRATE",
    "DIHYDROCHLORIDE", "DINITRATE", "DIPHOSPHATE", "DIPROPIONATE", "DISODIUM", "DOCUSATE", "ER",
    "FERRIC", "FERROUS", "FLUORIDE", "FOLINATE", "FUMARATE", "FUROATE", "FUSIDATE", "GLUCONATE",
    "GLYCERYL", "HCL", "HEMIHYDRATE", "HEMISUCCINATE", "HYDRATE", "HYDROBROMIDE",
    "HYDROCHLORIDE", "HYDROIODIDE", "HYDROXIDE", "IODIDE", "IRON", "LACTATE", "LITHIUM",
    "MAGNESIUM", "MALATE", "MALEATE", "MANGANESE", "MEGLUMINE", "MESILATE", "MESYLATE",
    "MONOHYDRATE", "NITRATE", "NITRITE", "OLEATE", "OXALATE", "OXIDE", "PALMITATE", "PAMOATE",
    "PENTAHYDRATE", "PHOSPHATE", "POLYMERISATE", "POTASSIUM", "PROPIONATE", "SALICYLATE",
    "SELENITE", "SILVER", "SODIUM", "SR", "STEARATE", "SUCCINATE", "SUCCINYLATED", "SULFATE",
    "SULFONATE", "SULPHATE", "TARTRATE", "THIOSULFATE", "TOSYLATE", "TRIHYDRATE", "TRINITRATE",
    "TROMETAMOL", "TROMETHAMINE", "TROMETHAMOL", "VALERATE", "XR", "ZINC",
];

/// Two-word salts that are themselves the active ingredient.
pub const PURE_SALT_COMPOUNDS: &[&str] = &[
    "ALUMINIUM HYDROXIDE", "ALUMINUM HYDROXIDE", "AMMONIUM CHLORIDE", "BARIUM SULFATE",
    "CALCIUM ACETATE", "CALCIUM CARBONATE", "CALCIUM CHLORIDE", "CALCIUM CITRATE",
    "CALCIUM FLUORIDE", "CALCIUM GLUCONATE", "CALCIUM HYDROXIDE", "CALCIUM LACTATE",
    "CALCIUM PHOSPHATE", "CALCIUM SULFATE", "COPPER SULFATE", "FERRIC SULFATE",
    "FERROUS FUMARATE", "FERROUS GLUCONATE", "FERROUS SULFATE", "FERROUS SULPHATE",
    "LITHIUM CARBONATE", "LITHIUM CITRATE", "MAGNESIUM ACETATE", "MAGNESIUM CARBONATE",
    "MAGNESIUM CHLORIDE", "MAGNESIUM CITRATE", "MAGNESIUM GLUCONATE", "MAGNESIUM HYDROXIDE",
    "MAGNESIUM PHOSPHATE", "MAGNESIUM SULFATE", "MAGNESIUM SULPHATE", "MANGANESE SULFATE",
    "POTASSIUM ACETATE", "POTASSIUM BICARBONATE", "POTASSIUM BROMIDE", "POTASSIUM CHLORIDE",
    "POTASSIUM CITRATE", "POTASSIUM FLUORIDE", "POTASSIUM GLUCONATE", "POTASSIUM HYDROXIDE",
    "POTASSIUM IODIDE", "POTASSIUM NITRATE", "POTASSIUM PHOSPHATE", "POTASSIUM SULFATE",
    "SILVER NITRATE", "SODIUM ACETATE", "SODIUM BICARBONATE", "SODIUM BROMIDE",
    "SODIUM CARBONATE", "SODIUM CHLORIDE", "SODIUM CITRATE", "SODIUM FLUORIDE",
    "SODIUM GLUCONATE", "SODIUM HYDROXIDE", "SODIUM IODIDE", "SODIUM LACTATE", "SODIUM NITRATE",
    "SODIUM PHOSPHATE", "SODIUM SELENITE", "SODIUM SULFATE", "SODIUM THIOSULFATE",
    "ZINC CHLORIDE", "ZINC GLUCONATE", "ZINC OXIDE", "ZINC SULFATE", "ZINC SULPHATE",
];

/// Cation names.
pub const SALT_CATIONS: &[&str] = &[
    "ALUMINIUM", "ALUMINUM", "AMMONIUM", "BARIUM", "CALCIUM", "COPPER", "FERRIC", "FERROUS",
    "IRON", "LITHIUM", "MAGNESIUM", "MANGANESE", "POTASSIUM", "SILVER", "SODIUM", "ZINC",
];

/// Anion names.
pub const SALT_ANIONS: &[&str] = &[
    "ACETATE", "BICARBONATE", "BROMIDE", "CARBONATE", "CHLORIDE", "CITRATE", "FLUORIDE",
    "FUMARATE", "GLUCONATE", "HYDROXIDE", "IODIDE", "LACTATE", "MALATE", "MALEATE", "NITRATE",
    "OXIDE", "PHOSPHATE", "SELENITE", "SUCCINATE", "SULFATE", "SULPHATE", "TARTRATE",
    "THIOSULFATE",
];

/// Elements that are marketed as standalone drugs.
pub const ELEMENT_DRUGS: &[&str] = &[
    "CALCIUM", "CHROMIUM", "COPPER", "FLUORIDE", "IODINE", "IRON", "MAGNESIUM", "MANGANESE",
    "PHOSPHORUS", "POTASSIUM", "SELENIUM", "SODIUM", "ZINC",
];

/// Unit and measurement tokens.
pub const UNIT_TOKENS: &[&str] = &[
    "%", "CC", "G", "GM", "GMS", "IU", "IU/ML", "KG", "L", "LSU", "MCG", "MCG/ML", "MEQ",
    "MEQS", "MG", "MG/5ML", "MG/L", "MG/ML", "ML", "MMOL", "MOL", "MU", "PCT", "UG", "UNIT",
    "UNITS",
];

/// ATC prefixes that denote combination products.
pub const ATC_COMBINATION_PATTERNS: &[&str] = &[
    "C09DA", "C09DB", "C09DX", "C09BA", "C09BB", "C09BX", "C07FB", "C07BB", "C07CB", "C10BA",
    "C10BX", "A10BD", "N02AA55", "N02AA59", "N02AJ", "N02BE51", "N02BE71", "J01CR", "J01RA",
    "R03AL", "R03AK", "R03DA20", "R03DA55", "R03DB", "A02BD", "M05BB",
];

/// Trailing ATC digits that denote combination products.
pub const COMBINATION_ATC_SUFFIXES: &[&str] = &[
    "20", "30", "50", "51", "52", "53", "54", "55", "56", "57", "58", "59",
];

/// Tokens that end an `AS <salt>` tail.
pub const SALT_TAIL_BREAK_TOKENS: &[&str] = &[
    "+", "/", "&", "AND", "WITH",
];

/// Generic names that contain spaces.
pub const MULTIWORD_GENERICS: &[&str] = &[
    "ACETATED RINGER'S", "ACETATED RINGER'S SOLUTION", "ACETYLSALICYLIC ACID", "ALBUMIN HUMAN",
    "ALUMINUM HYDROXIDE", "AMINO ACID", "ASCORBIC ACID", "BCG VACCINE", "CALCIUM CARBONATE",
    "CALCIUM CHLORIDE", "CALCIUM GLUCONATE", "CHENODEOXYCHOLIC ACID", "CHONDROITIN SULFATE",
    "CLAVULANIC ACID", "DT VACCINE", "DTP + HEPATITIS B VACCINE", "DTP + HIB VACCINE",
    "DTP + IPV + HIB VACCINE", "DTP + IPV VACCINE", "DTP VACCINE", "FERRIC CARBOXYMALTOSE",
    "FERROUS FUMARATE", "FERROUS SULFATE", "FOLIC ACID", "FUSIDIC ACID", "GLYCERYL TRINITRATE",
    "HEPATITIS A + B VACCINE", "HEPATITIS A VACCINE", "HEPATITIS B IMMUNOGLOBULIN",
    "HEPATITIS B VACCINE", "HIB VACCINE", "HPV VACCINE", "HUMAN ALBUMIN", "HYALURONIC ACID",
    "INFLUENZA VACCINE", "INSULIN ASPART", "INSULIN DEGLUDEC", "INSULIN DETEMIR",
    "INSULIN GLARGINE", "INSULIN GLULISINE", "INSULIN HUMAN", "INSULIN LISPRO",
    "INSULIN REGULAR", "IPV VACCINE", "IRON DEXTRAN", "IRON SUCROSE", "ISOSORBIDE DINITRATE",
    "ISOSORBIDE MONONITRATE", "JAPANESE ENCEPHALITIS VACCINE", "LACTATED RINGER'S",
    "LACTATED RINGER'S SOLUTION", "MAGNESIUM HYDROXIDE", "MAGNESIUM SULFATE", "MEASLES VACCINE",
    "MEFENAMIC ACID", "MENINGOCOCCAL VACCINE", "MMR VACCINE", "MUMPS VACCINE", "NALIDIXIC ACID",
    "OPV VACCINE", "PENTAVALENT VACCINE", "PNEUMOCOCCAL VACCINE", "POTASSIUM CHLORIDE",
    "RABIES VACCINE", "RETINOIC ACID", "RINGER'S SOLUTION", "ROTAVIRUS VACCINE",
    "RUBELLA VACCINE", "SODIUM BICARBONATE", "SODIUM CHLORIDE", "SODIUM HYALURONATE",
    "TETANUS ANTITOXIN", "TETANUS IMMUNOGLOBULIN", "TRANEXAMIC ACID", "TYPHOID VACCINE",
    "URSODEOXYCHOLIC ACID", "VALPROIC ACID", "VARICELLA VACCINE", "VITAMIN A", "VITAMIN B",
    "VITAMIN B1", "VITAMIN B12", "VITAMIN B2", "VITAMIN B6", "VITAMIN C", "VITAMIN D",
    "VITAMIN D3", "VITAMIN E", "VITAMIN K", "VITAMIN K1", "WATER FOR INJECTION",
    "YELLOW FEVER VACCINE", "ZINC SULFATE",
];

/// Anion to the cations it commonly pairs with.
pub const ANION_TO_CATIONS: &[(&str, &[&str])] = &[
    ("CHLORIDE", &["AMMONIUM", "CALCIUM", "MAGNESIUM", "POTASSIUM", "SODIUM", "ZINC"]),
    ("SULFATE", &["CALCIUM", "COPPER", "FERROUS", "MAGNESIUM", "MANGANESE", "POTASSIUM", "SODIUM", "ZINC"]),
    ("SULPHATE", &["CALCIUM", "FERROUS", "MAGNESIUM", "POTASSIUM", "SODIUM", "ZINC"]),
    ("PHOSPHATE", &["CALCIUM", "MAGNESIUM", "POTASSIUM", "SODIUM"]),
    ("CARBONATE", &["CALCIUM", "MAGNESIUM", "SODIUM"]),
    ("BICARBONATE", &["POTASSIUM", "SODIUM"]),
    ("CITRATE", &["CALCIUM", "MAGNESIUM", "POTASSIUM", "SODIUM"]),
    ("LACTATE", &["CALCIUM", "SODIUM"]),
    ("ACETATE", &["CALCIUM", "MAGNESIUM", "POTASSIUM", "SODIUM"]),
    ("GLUCONATE", &["CALCIUM", "FERROUS", "MAGNESIUM", "POTASSIUM", "SODIUM", "ZINC"]),
    ("HYDROXIDE", &["ALUMINIUM", "ALUMINUM", "CALCIUM", "MAGNESIUM", "POTASSIUM", "SODIUM"]),
    ("NITRATE", &["POTASSIUM", "SILVER", "SODIUM"]),
    ("BROMIDE", &["POTASSIUM", "SODIUM"]),
    ("IODIDE", &["POTASSIUM", "SODIUM"]),
    ("FLUORIDE", &["CALCIUM", "SODIUM"]),
    ("FUMARATE", &["FERROUS"]),
];

/// Forms that are interchangeable for matching. Groups are disjoint.
pub const FORM_EQUIVALENCE_GROUPS: &[&[&str]] = &[
    &["CAPLET", "CAPSULE", "TABLET"],
    &["ELIXIR", "SOLUTION", "SYRUP"],
    &["SUSPENSION"],
    &["CREAM", "GEL", "OINTMENT"],
    &["AMPULE", "INJECTION", "VIAL"],
    &["AEROSOL", "DPI", "INHALER", "MDI", "NEBULE"],
    &["DROPS"],
];

/// Formulary route descriptors and the routes they admit.
pub const ROUTE_DESCRIPTORS: &[(&str, &[&str])] = &[
    ("Oral:", &["ORAL"]),
    ("Oral/Tube feed:", &["ORAL"]),
    ("Inj.:", &["INTRAVENOUS", "INTRAMUSCULAR", "SUBCUTANEOUS"]),
    ("IV:", &["INTRAVENOUS"]),
    ("IV/SC:", &["INTRAVENOUS", "SUBCUTANEOUS"]),
    ("SC:", &["SUBCUTANEOUS"]),
    ("Subdermal:", &["SUBCUTANEOUS"]),
    ("Inhalation:", &["INHALATION"]),
    ("Topical:", &["TOPICAL"]),
    ("Patch:", &["TRANSDERMAL"]),
    ("Ophthalmic:", &["OPHTHALMIC"]),
    ("Intraocular:", &["OPHTHALMIC"]),
    ("Otic:", &["OTIC"]),
    ("Nasal:", &["NASAL"]),
    ("Rectal:", &["RECTAL"]),
    ("Vaginal:", &["VAGINAL"]),
    ("Sublingual:", &["SUBLINGUAL"]),
    ("Oral antiseptic:", &["ORAL"]),
    ("Oral/Inj.:", &["ORAL", "INTRAVENOUS", "INTRAMUSCULAR", "SUBCUTANEOUS"]),
];
