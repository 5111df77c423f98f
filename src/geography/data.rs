//! Built-in CGIAR geography dataset.

use super::types::RegionCode::{self, Cwana, Esa, Eur, Lac, Noa, Sa, Seap, Wca};

// ─── Region catalog ─────────────────────────────────────────────

/// Display order used by the region picker.
pub const CGIAR_REGION_OPTIONS: [RegionCode; 8] = [Esa, Wca, Cwana, Sa, Seap, Lac, Eur, Noa];

// ─── Countries ──────────────────────────────────────────────────

pub struct CountryEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub region: RegionCode,
}

const fn c(code: &'static str, name: &'static str, region: RegionCode) -> CountryEntry {
    CountryEntry { code, name, region }
}

pub const CGIAR_COUNTRIES: &[CountryEntry] = &[
    // East and Southern Africa
    c("AO", "Angola", Esa),
    c("BI", "Burundi", Esa),
    c("BW", "Botswana", Esa),
    c("DJ", "Djibouti", Esa),
    c("ER", "Eritrea", Esa),
    c("ET", "Ethiopia", Esa),
    c("KE", "Kenya", Esa),
    c("KM", "Comoros", Esa),
    c("LS", "Lesotho", Esa),
    c("MG", "Madagascar", Esa),
    c("MU", "Mauritius", Esa),
    c("MW", "Malawi", Esa),
    c("MZ", "Mozambique", Esa),
    c("NA", "Namibia", Esa),
    c("RW", "Rwanda", Esa),
    c("SC", "Seychelles", Esa),
    c("SO", "Somalia", Esa),
    c("SS", "South Sudan", Esa),
    c("SZ", "Eswatini", Esa),
    c("TZ", "Tanzania", Esa),
    c("UG", "Uganda", Esa),
    c("ZA", "South Africa", Esa),
    c("ZM", "Zambia", Esa),
    c("ZW", "Zimbabwe", Esa),
    // West and Central Africa
    c("BF", "Burkina Faso", Wca),
    c("BJ", "Benin", Wca),
    c("CD", "Democratic Republic of the Congo", Wca),
    c("CF", "Central African Republic", Wca),
    c("CG", "Republic of the Congo", Wca),
    c("CI", "Côte d'Ivoire", Wca),
    c("CM", "Cameroon", Wca),
    c("CV", "Cabo Verde", Wca),
    c("GA", "Gabon", Wca),
    c("GH", "Ghana", Wca),
    c("GM", "Gambia", Wca),
    c("GN", "Guinea", Wca),
    c("GQ", "Equatorial Guinea", Wca),
    c("GW", "Guinea-Bissau", Wca),
    c("LR", "Liberia", Wca),
    c("ML", "Mali", Wca),
    c("MR", "Mauritania", Wca),
    c("NE", "Niger", Wca),
    c("NG", "Nigeria", Wca),
    c("SL", "Sierra Leone", Wca),
    c("SN", "Senegal", Wca),
    c("ST", "São Tomé and Príncipe", Wca),
    c("TD", "Chad", Wca),
    c("TG", "Togo", Wca),
    // Central and West Asia and North Africa
    c("AE", "United Arab Emirates", Cwana),
    c("AF", "Afghanistan", Cwana),
    c("AM", "Armenia", Cwana),
    c("AZ", "Azerbaijan", Cwana),
    c("BH", "Bahrain", Cwana),
    c("DZ", "Algeria", Cwana),
    c("EG", "Egypt", Cwana),
    c("GE", "Georgia", Cwana),
    c("IQ", "Iraq", Cwana),
    c("IR", "Iran", Cwana),
    c("JO", "Jordan", Cwana),
    c("KG", "Kyrgyzstan", Cwana),
    c("KW", "Kuwait", Cwana),
    c("KZ", "Kazakhstan", Cwana),
    c("LB", "Lebanon", Cwana),
    c("LY", "Libya", Cwana),
    c("MA", "Morocco", Cwana),
    c("OM", "Oman", Cwana),
    c("PS", "Palestine", Cwana),
    c("QA", "Qatar", Cwana),
    c("SA", "Saudi Arabia", Cwana),
    c("SD", "Sudan", Cwana),
    c("SY", "Syria", Cwana),
    c("TJ", "Tajikistan", Cwana),
    c("TM", "Turkmenistan", Cwana),
    c("TN", "Tunisia", Cwana),
    c("TR", "Türkiye", Cwana),
    c("UZ", "Uzbekistan", Cwana),
    c("YE", "Yemen", Cwana),
    // South Asia
    c("BD", "Bangladesh", Sa),
    c("BT", "Bhutan", Sa),
    c("IN", "India", Sa),
    c("LK", "Sri Lanka", Sa),
    c("MV", "Maldives", Sa),
    c("NP", "Nepal", Sa),
    c("PK", "Pakistan", Sa),
    // Southeast Asia and the Pacific
    c("AU", "Australia", Seap),
    c("BN", "Brunei", Seap),
    c("CN", "China", Seap),
    c("FJ", "Fiji", Seap),
    c("FM", "Micronesia", Seap),
    c("ID", "Indonesia", Seap),
    c("JP", "Japan", Seap),
    c("KH", "Cambodia", Seap),
    c("KI", "Kiribati", Seap),
    c("KP", "North Korea", Seap),
    c("KR", "South Korea", Seap),
    c("LA", "Laos", Seap),
    c("MH", "Marshall Islands", Seap),
    c("MM", "Myanmar", Seap),
    c("MN", "Mongolia", Seap),
    c("MY", "Malaysia", Seap),
    c("NR", "Nauru", Seap),
    c("NZ", "New Zealand", Seap),
    c("PG", "Papua New Guinea", Seap),
    c("PH", "Philippines", Seap),
    c("PW", "Palau", Seap),
    c("SB", "Solomon Islands", Seap),
    c("SG", "Singapore", Seap),
    c("TH", "Thailand", Seap),
    c("TL", "Timor-Leste", Seap),
    c("TO", "Tonga", Seap),
    c("TV", "Tuvalu", Seap),
    c("VN", "Vietnam", Seap),
    c("VU", "Vanuatu", Seap),
    c("WS", "Samoa", Seap),
    // Latin America and the Caribbean
    c("AG", "Antigua and Barbuda", Lac),
    c("AR", "Argentina", Lac),
    c("BB", "Barbados", Lac),
    c("BO", "Bolivia", Lac),
    c("BR", "Brazil", Lac),
    c("BS", "Bahamas", Lac),
    c("BZ", "Belize", Lac),
    c("CL", "Chile", Lac),
    c("CO", "Colombia", Lac),
    c("CR", "Costa Rica", Lac),
    c("CU", "Cuba", Lac),
    c("DM", "Dominica", Lac),
    c("DO", "Dominican Republic", Lac),
    c("EC", "Ecuador", Lac),
    c("GD", "Grenada", Lac),
    c("GT", "Guatemala", Lac),
    c("GY", "Guyana", Lac),
    c("HN", "Honduras", Lac),
    c("HT", "Haiti", Lac),
    c("JM", "Jamaica", Lac),
    c("KN", "Saint Kitts and Nevis", Lac),
    c("LC", "Saint Lucia", Lac),
    c("MX", "Mexico", Lac),
    c("NI", "Nicaragua", Lac),
    c("PA", "Panama", Lac),
    c("PE", "Peru", Lac),
    c("PY", "Paraguay", Lac),
    c("SR", "Suriname", Lac),
    c("SV", "El Salvador", Lac),
    c("TT", "Trinidad and Tobago", Lac),
    c("UY", "Uruguay", Lac),
    c("VC", "Saint Vincent and the Grenadines", Lac),
    c("VE", "Venezuela", Lac),
    // Europe
    c("AD", "Andorra", Eur),
    c("AL", "Albania", Eur),
    c("AT", "Austria", Eur),
    c("BA", "Bosnia and Herzegovina", Eur),
    c("BE", "Belgium", Eur),
    c("BG", "Bulgaria", Eur),
    c("BY", "Belarus", Eur),
    c("CH", "Switzerland", Eur),
    c("CY", "Cyprus", Eur),
    c("CZ", "Czechia", Eur),
    c("DE", "Germany", Eur),
    c("DK", "Denmark", Eur),
    c("EE", "Estonia", Eur),
    c("ES", "Spain", Eur),
    c("FI", "Finland", Eur),
    c("FR", "France", Eur),
    c("GB", "United Kingdom", Eur),
    c("GR", "Greece", Eur),
    c("HR", "Croatia", Eur),
    c("HU", "Hungary", Eur),
    c("IE", "Ireland", Eur),
    c("IS", "Iceland", Eur),
    c("IT", "Italy", Eur),
    c("LI", "Liechtenstein", Eur),
    c("LT", "Lithuania", Eur),
    c("LU", "Luxembourg", Eur),
    c("LV", "Latvia", Eur),
    c("MC", "Monaco", Eur),
    c("MD", "Moldova", Eur),
    c("ME", "Montenegro", Eur),
    c("MK", "North Macedonia", Eur),
    c("MT", "Malta", Eur),
    c("NL", "Netherlands", Eur),
    c("NO", "Norway", Eur),
    c("PL", "Poland", Eur),
    c("PT", "Portugal", Eur),
    c("RO", "Romania", Eur),
    c("RS", "Serbia", Eur),
    c("RU", "Russia", Eur),
    c("SE", "Sweden", Eur),
    c("SI", "Slovenia", Eur),
    c("SK", "Slovakia", Eur),
    c("SM", "San Marino", Eur),
    c("UA", "Ukraine", Eur),
    c("VA", "Holy See", Eur),
    c("XK", "Kosovo", Eur),
    // North America
    c("CA", "Canada", Noa),
    c("US", "United States", Noa),
];

// ─── Subnational units ──────────────────────────────────────────

pub struct SubnationalEntry {
    pub code: &'static str,
    pub name: &'static str,
}

const fn s(code: &'static str, name: &'static str) -> SubnationalEntry {
    SubnationalEntry { code, name }
}

/// First-level administrative units (ISO 3166-2) for the countries where
/// MELIAF studies most often run.
pub const SUBNATIONAL_UNITS: &[SubnationalEntry] = &[
    // Australia
    s("AU-ACT", "Australian Capital Territory"),
    s("AU-NSW", "New South Wales"),
    s("AU-NT", "Northern Territory"),
    s("AU-QLD", "Queensland"),
    s("AU-SA", "South Australia"),
    s("AU-TAS", "Tasmania"),
    s("AU-VIC", "Victoria"),
    s("AU-WA", "Western Australia"),
    // Brazil
    s("BR-AC", "Acre"),
    s("BR-AL", "Alagoas"),
    s("BR-AM", "Amazonas"),
    s("BR-AP", "Amapá"),
    s("BR-BA", "Bahia"),
    s("BR-CE", "Ceará"),
    s("BR-DF", "Distrito Federal"),
    s("BR-ES", "Espírito Santo"),
    s("BR-GO", "Goiás"),
    s("BR-MA", "Maranhão"),
    s("BR-MG", "Minas Gerais"),
    s("BR-MS", "Mato Grosso do Sul"),
    s("BR-MT", "Mato Grosso"),
    s("BR-PA", "Pará"),
    s("BR-PB", "Paraíba"),
    s("BR-PE", "Pernambuco"),
    s("BR-PI", "Piauí"),
    s("BR-PR", "Paraná"),
    s("BR-RJ", "Rio de Janeiro"),
    s("BR-RN", "Rio Grande do Norte"),
    s("BR-RO", "Rondônia"),
    s("BR-RR", "Roraima"),
    s("BR-RS", "Rio Grande do Sul"),
    s("BR-SC", "Santa Catarina"),
    s("BR-SE", "Sergipe"),
    s("BR-SP", "São Paulo"),
    s("BR-TO", "Tocantins"),
    // Ethiopia
    s("ET-AA", "Addis Ababa"),
    s("ET-AF", "Afar"),
    s("ET-AM", "Amhara"),
    s("ET-BE", "Benishangul-Gumuz"),
    s("ET-DD", "Dire Dawa"),
    s("ET-GA", "Gambela"),
    s("ET-HA", "Harari"),
    s("ET-OR", "Oromia"),
    s("ET-SI", "Sidama"),
    s("ET-SO", "Somali"),
    s("ET-TI", "Tigray"),
    // India
    s("IN-AP", "Andhra Pradesh"),
    s("IN-AS", "Assam"),
    s("IN-BR", "Bihar"),
    s("IN-GJ", "Gujarat"),
    s("IN-HR", "Haryana"),
    s("IN-JH", "Jharkhand"),
    s("IN-KA", "Karnataka"),
    s("IN-KL", "Kerala"),
    s("IN-MH", "Maharashtra"),
    s("IN-MP", "Madhya Pradesh"),
    s("IN-OR", "Odisha"),
    s("IN-PB", "Punjab"),
    s("IN-RJ", "Rajasthan"),
    s("IN-TN", "Tamil Nadu"),
    s("IN-UP", "Uttar Pradesh"),
    s("IN-WB", "West Bengal"),
    // Kenya
    s("KE-01", "Baringo"),
    s("KE-02", "Bomet"),
    s("KE-03", "Bungoma"),
    s("KE-04", "Busia"),
    s("KE-05", "Elgeyo/Marakwet"),
    s("KE-06", "Embu"),
    s("KE-07", "Garissa"),
    s("KE-08", "Homa Bay"),
    s("KE-09", "Isiolo"),
    s("KE-10", "Kajiado"),
    s("KE-11", "Kakamega"),
    s("KE-12", "Kericho"),
    s("KE-13", "Kiambu"),
    s("KE-14", "Kilifi"),
    s("KE-15", "Kirinyaga"),
    s("KE-16", "Kisii"),
    s("KE-17", "Kisumu"),
    s("KE-18", "Kitui"),
    s("KE-19", "Kwale"),
    s("KE-20", "Laikipia"),
    s("KE-21", "Lamu"),
    s("KE-22", "Machakos"),
    s("KE-23", "Makueni"),
    s("KE-24", "Mandera"),
    s("KE-25", "Marsabit"),
    s("KE-26", "Meru"),
    s("KE-27", "Migori"),
    s("KE-28", "Mombasa"),
    s("KE-29", "Murang'a"),
    s("KE-30", "Nairobi City"),
    s("KE-31", "Nakuru"),
    s("KE-32", "Nandi"),
    s("KE-33", "Narok"),
    s("KE-34", "Nyamira"),
    s("KE-35", "Nyandarua"),
    s("KE-36", "Nyeri"),
    s("KE-37", "Samburu"),
    s("KE-38", "Siaya"),
    s("KE-39", "Taita/Taveta"),
    s("KE-40", "Tana River"),
    s("KE-41", "Tharaka-Nithi"),
    s("KE-42", "Trans Nzoia"),
    s("KE-43", "Turkana"),
    s("KE-44", "Uasin Gishu"),
    s("KE-45", "Vihiga"),
    s("KE-46", "Wajir"),
    s("KE-47", "West Pokot"),
    // Zimbabwe
    s("ZW-BU", "Bulawayo"),
    s("ZW-HA", "Harare"),
    s("ZW-MA", "Manicaland"),
    s("ZW-MC", "Mashonaland Central"),
    s("ZW-ME", "Mashonaland East"),
    s("ZW-MI", "Midlands"),
    s("ZW-MN", "Matabeleland North"),
    s("ZW-MS", "Matabeleland South"),
    s("ZW-MV", "Masvingo"),
    s("ZW-MW", "Mashonaland West"),
];
