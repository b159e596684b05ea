//! Shipped manufacturer table
//!
//! Keys are either a full 3-character WMI or a 2-character prefix used when
//! no full WMI matches.

pub(crate) const MANUFACTURERS: &[(&str, &str)] = &[
    // Africa
    ("AAV", "Volkswagen South Africa"),
    ("AC5", "Hyundai South Africa"),
    ("ADD", "Hyundai South Africa"),
    ("AFA", "Ford South Africa"),
    ("AHT", "Toyota South Africa"),
    // Asia
    ("JA3", "Mitsubishi"),
    ("JA4", "Mitsubishi"),
    ("JA", "Isuzu"),
    ("JF", "Fuji Heavy Industries (Subaru)"),
    ("JHL", "Honda"),
    ("JHM", "Honda"),
    ("JHF", "Honda"),
    ("JH4", "Acura"),
    ("JK", "Kawasaki (motorcycles)"),
    ("JM", "Mazda"),
    ("JN", "Nissan"),
    ("JNK", "Infiniti"),
    ("JS", "Suzuki"),
    ("JT", "Toyota"),
    ("JTH", "Lexus"),
    ("JTJ", "Lexus"),
    ("JY", "Yamaha (motorcycles)"),
    ("KL", "Daewoo General Motors South Korea"),
    ("KM", "Hyundai"),
    ("KMY", "Daelim (motorcycles)"),
    ("KM1", "Hyosung (motorcycles)"),
    ("KN", "Kia"),
    ("KNM", "Renault Samsung"),
    ("KPA", "SsangYong"),
    ("KPT", "SsangYong"),
    ("L56", "Renault Samsung"),
    ("L5Y", "Merato Motorcycle Taizhou Zhongneng"),
    ("LDY", "Zhongtong Coach, China"),
    ("LGH", "Dong Feng (DFM), China"),
    ("LKL", "Suzhou King Long, China"),
    ("LSY", "Brilliance Zhonghua"),
    ("LTV", "Toyota Tian Jin"),
    ("LVS", "Ford Chang An"),
    ("LVV", "Chery, China"),
    ("LZM", "MAN China"),
    ("LZE", "Isuzu Guangzhou, China"),
    ("LZG", "Shaanxi Automobile Group, China"),
    ("LZY", "Yutong Zhengzhou, China"),
    ("MA1", "Mahindra"),
    ("MA3", "Suzuki India"),
    ("MA7", "Honda Siel Cars India"),
    ("MAL", "Hyundai"),
    ("MHR", "Honda Indonesia"),
    ("MNB", "Ford Thailand"),
    ("MNT", "Nissan Thailand"),
    ("MMB", "Mitsubishi Thailand"),
    ("MMM", "Chevrolet Thailand"),
    ("MMT", "Mitsubishi Thailand"),
    ("MM8", "Mazda Thailand"),
    ("MPA", "Isuzu Thailand"),
    ("MP1", "Isuzu Thailand"),
    ("MRH", "Honda Thailand"),
    ("MR0", "Toyota Thailand"),
    ("NLE", "Mercedes-Benz Turk Truck"),
    ("NM0", "Ford Turkey"),
    ("NM4", "Tofas Turk"),
    ("NMT", "Toyota Turkiye"),
    ("PE1", "Ford Phillipines"),
    ("PE3", "Mazda Phillipines"),
    ("PL1", "Proton, Malaysia"),
    ("RFB", "Kymco, Taiwan"),
    ("RFG", "Sanyang SYM, Taiwan"),
    ("RFL", "Adly, Taiwan"),
    ("RFT", "CPI, Taiwan"),
    ("RF3", "Aeon Motor, Taiwan"),
    // Europe
    ("SAL", "Land Rover"),
    ("SAJ", "Jaguar"),
    ("SAR", "Rover"),
    ("SCA", "Rolls Royce"),
    ("SCC", "Lotus Cars"),
    ("SCE", "DeLorean Motor Cars N. Ireland (UK)"),
    ("SCF", "Aston"),
    ("SDB", "Peugeot UK"),
    ("SFD", "Alexander Dennis UK"),
    ("SHS", "Honda UK"),
    ("SJN", "Nissan UK"),
    ("SU9", "Solaris Bus & Coach (Poland)"),
    ("SWV", "TA-NO (Poland)"),
    ("TMA", "Hyundai Motor Manufacturing Czech"),
    ("TMB", "Skoda (Czech Republic)"),
    ("TMK", "Karosa (Czech Republic)"),
    ("TMP", "Skoda trolleybuses (Czech Republic)"),
    ("TMT", "Tatra (Czech Republic)"),
    ("TM9", "Skoda trolleybuses (Czech Republic)"),
    ("TN9", "Karosa (Czech Republic)"),
    ("TRA", "Ikarus Bus"),
    ("TRU", "Audi Hungary"),
    ("TSE", "Ikarus Egyedi Autobuszgyar, (Hungary)"),
    ("TSM", "Suzuki Hungary"),
    ("TW1", "Toyota Caetano Portugal"),
    ("TYA", "Mitsubishi Trucks Portugal"),
    ("TYB", "Mitsubishi Trucks Portugal"),
    ("UU1", "Renault (Dacia)"),
    ("U5Y", "Kia Motors Slovakia"),
    ("U6Y", "Kia Motors Slovakia"),
    ("VAG", "Magna Steyr Puch"),
    ("VAN", "MAN Austria"),
    ("VF1", "Renault"),
    ("VF2", "Renault"),
    ("VF3", "Peugeot"),
    ("VF4", "Talbot"),
    ("VF6", "Renault (Trucks & Buses)"),
    ("VF7", "Citroën"),
    ("VF8", "Matra"),
    ("VF9", "Bugatti"),
    ("VLU", "Scania France"),
    ("VNE", "Irisbus (France)"),
    ("VNK", "Toyota France"),
    ("VSE", "Suzuki Spain (Santana Motors)"),
    ("VSK", "Nissan Spain"),
    ("VSS", "SEAT"),
    ("VSX", "Opel Spain"),
    ("VS6", "Ford Spain"),
    ("VS9", "Carrocerias Ayats (Spain)"),
    ("VWV", "Volkswagen Spain"),
    ("VX1", "Zastava / Yugo Serbia"),
    ("WAG", "Neoplan"),
    ("WAU", "Audi"),
    ("WA1", "Audi SUV"),
    ("WBA", "BMW"),
    ("WBS", "BMW M"),
    ("WBY", "BMW i"),
    ("WDA", "Daimler"),
    ("WDB", "Mercedes-Benz"),
    ("WDC", "DaimlerChrysler"),
    ("WDD", "Mercedes-Benz"),
    ("WEB", "Evobus GmbH (Mercedes-Bus)"),
    ("WJM", "Iveco Magirus"),
    ("WF0", "Ford Germany"),
    ("WKK", "Kässbohrer/Setra"),
    ("WMA", "MAN Germany"),
    ("WME", "smart"),
    ("WMW", "MINI"),
    ("WMX", "Mercedes-AMG"),
    ("WP0", "Porsche car"),
    ("WP1", "Porsche SUV"),
    ("W0L", "Opel"),
    ("WUA", "quattro GmbH"),
    ("WV1", "Volkswagen Commercial Vehicles"),
    ("WV2", "Volkswagen Bus/Van"),
    ("WVG", "Volkswagen SUV"),
    ("WVW", "Volkswagen"),
    ("WV", "Volkswagen"),
    ("XLB", "Volvo (NedCar)"),
    ("XLE", "Scania Netherlands"),
    ("XLR", "DAF (Trucks)"),
    ("XMC", "Mitsubishi (NedCar)"),
    ("XTA", "Lada/AutoVaz (Russia)"),
    ("XTT", "UAZ/Sollers (Russia)"),
    ("XUF", "General Motors Russia"),
    ("XUU", "AvtoTor (Russia, General Motors SKD)"),
    ("XW8", "Volkswagen Group Russia"),
    ("XWB", "UZ-Daewoo (Uzbekistan)"),
    ("XWE", "AvtoTor (Russia, Hyundai-Kia SKD)"),
    ("X4X", "AvtoTor (Russia, BMW SKD)"),
    ("X7L", "Renault AvtoFramos (Russia)"),
    ("X7M", "Hyundai TagAZ (Russia)"),
    ("YBW", "Volkswagen Belgium"),
    ("YCM", "Mazda Belgium"),
    ("YE2", "Van Hool (buses)"),
    ("YH2", "BRP Finland (Lynx snowmobiles)"),
    ("YK1", "Saab-Valmet Finland"),
    ("YS2", "Scania AB"),
    ("YS3", "Saab"),
    ("YS4", "Scania Bus"),
    ("YTN", "Saab NEVS"),
    ("YT9", "Koenigsegg"),
    ("YU7", "Husaberg (motorcycles)"),
    ("YV1", "Volvo Cars"),
    ("YV4", "Volvo Cars"),
    ("YV2", "Volvo Trucks"),
    ("YV3", "Volvo Buses"),
    ("Y6D", "Zaporozhets/AvtoZAZ (Ukraine)"),
    ("ZAA", "Autobianchi"),
    ("ZAM", "Maserati"),
    ("ZAP", "Piaggio/Vespa/Gilera"),
    ("ZAR", "Alfa Romeo"),
    ("ZBN", "Benelli"),
    ("ZCG", "Cagiva SpA / MV Agusta"),
    ("ZCF", "Iveco"),
    ("ZDM", "Ducati Motor Holdings SpA"),
    ("ZDF", "Ferrari Dino"),
    ("ZD0", "Yamaha Italy"),
    ("ZD3", "Beta Motor"),
    ("ZD4", "Aprilia"),
    ("ZFA", "Fiat"),
    ("ZFC", "Fiat V.I."),
    ("ZFF", "Ferrari"),
    ("ZGU", "Moto Guzzi"),
    ("ZHW", "Lamborghini"),
    ("ZJM", "Malaguti"),
    ("ZJN", "Innocenti"),
    ("ZKH", "Husqvarna Motorcycles Italy"),
    ("ZLA", "Lancia"),
    ("Z8M", "Marussia (Russia)"),
    // North America
    ("1B3", "Dodge"),
    ("1C3", "Chrysler"),
    ("1C6", "Chrysler"),
    ("1D3", "Dodge"),
    ("1FA", "Ford Motor Company"),
    ("1FB", "Ford Motor Company"),
    ("1FC", "Ford Motor Company"),
    ("1FD", "Ford Motor Company"),
    ("1FM", "Ford Motor Company"),
    ("1FT", "Ford Motor Company"),
    ("1FU", "Freightliner"),
    ("1FV", "Freightliner"),
    ("1F9", "FWD Corp."),
    ("1G", "General Motors USA"),
    ("1GC", "Chevrolet Truck USA"),
    ("1GT", "GMC Truck USA"),
    ("1G1", "Chevrolet USA"),
    ("1G2", "Pontiac USA"),
    ("1G3", "Oldsmobile USA"),
    ("1G4", "Buick USA"),
    ("1G6", "Cadillac USA"),
    ("1G8", "Saturn USA"),
    ("1GM", "Pontiac USA"),
    ("1GY", "Cadillac USA"),
    ("1H", "Honda USA"),
    ("1HD", "Harley-Davidson"),
    ("1HG", "Honda USA"),
    ("1J4", "Jeep"),
    ("1J8", "Jeep"),
    ("1L", "Lincoln USA"),
    ("1ME", "Mercury USA"),
    ("1M1", "Mack Truck USA"),
    ("1M2", "Mack Truck USA"),
    ("1M3", "Mack Truck USA"),
    ("1M4", "Mack Truck USA"),
    ("1M9", "Mynatt Truck & Equipment"),
    ("1N", "Nissan USA"),
    ("1NX", "NUMMI USA"),
    ("1P3", "Plymouth USA"),
    ("1R9", "Roadrunner Hay Squeeze USA"),
    ("1VW", "Volkswagen USA"),
    ("1XK", "Kenworth USA"),
    ("1XP", "Peterbilt USA"),
    ("1YV", "Mazda USA (AutoAlliance International)"),
    ("1ZV", "Ford (AutoAlliance International)"),
    ("2A4", "Chrysler Canada"),
    ("2BP", "Bombardier Recreational Products"),
    ("2B3", "Dodge Canada"),
    ("2B7", "Dodge Canada"),
    ("2C3", "Chrysler Canada"),
    ("2CN", "CAMI"),
    ("2D3", "Dodge Canada"),
    ("2FA", "Ford Motor Company Canada"),
    ("2FB", "Ford Motor Company Canada"),
    ("2FC", "Ford Motor Company Canada"),
    ("2FM", "Ford Motor Company Canada"),
    ("2FT", "Ford Motor Company Canada"),
    ("2FU", "Freightliner"),
    ("2FV", "Freightliner"),
    ("2FZ", "Sterling"),
    ("2G", "General Motors Canada"),
    ("2G1", "Chevrolet Canada"),
    ("2G2", "Pontiac Canada"),
    ("2G3", "Oldsmobile Canada"),
    ("2G4", "Buick Canada"),
    ("2HG", "Honda Canada"),
    ("2HK", "Honda Canada"),
    ("2HJ", "Honda Canada"),
    ("2HM", "Hyundai Canada"),
    ("2M", "Mercury"),
    ("2NV", "Nova Bus Canada"),
    ("2P3", "Plymouth Canada"),
    ("2T", "Toyota Canada"),
    ("2TP", "Triple E Canada LTD"),
    ("2V4", "Volkswagen Canada"),
    ("2V8", "Volkswagen Canada"),
    ("2WK", "Western Star"),
    ("2WL", "Western Star"),
    ("2WM", "Western Star"),
    ("3C4", "Chrysler Mexico"),
    ("3D3", "Dodge Mexico"),
    ("3D4", "Dodge Mexico"),
    ("3FA", "Ford Motor Company Mexico"),
    ("3FE", "Ford Motor Company Mexico"),
    ("3G", "General Motors Mexico"),
    ("3H", "Honda Mexico"),
    ("3JB", "BRP Mexico (all-terrain vehicles)"),
    ("3MD", "Mazda Mexico"),
    ("3MZ", "Mazda Mexico"),
    ("3N", "Nissan Mexico"),
    ("3NS", "Polaris Industries USA"),
    ("3NE", "Polaris Industries USA"),
    ("3P3", "Plymouth Mexico"),
    ("3VW", "Volkswagen Mexico"),
    ("4F", "Mazda USA"),
    ("4JG", "Mercedes-Benz USA"),
    ("4M", "Mercury"),
    ("4RK", "Nova Bus USA"),
    ("4S", "Subaru-Isuzu Automotive"),
    ("4T", "Toyota"),
    ("4T9", "Lumen Motors"),
    ("4UF", "Arctic Cat Inc."),
    ("4US", "BMW USA"),
    ("4UZ", "Frt-Thomas Bus"),
    ("4V1", "Volvo"),
    ("4V2", "Volvo"),
    ("4V4", "Volvo"),
    ("4V5", "Volvo"),
    ("4V6", "Volvo"),
    ("4VL", "Volvo"),
    ("4VM", "Volvo"),
    ("4VZ", "Volvo"),
    ("538", "Zero Motorcycles (USA)"),
    ("5F", "Honda USA-Alabama"),
    ("5J", "Honda USA-Ohio"),
    ("5L", "Lincoln"),
    ("5T", "Toyota USA - trucks"),
    ("5YJ", "Tesla"),
    ("56K", "Indian Motorcycle USA"),
    // Oceania
    ("6AB", "MAN Australia"),
    ("6F4", "Nissan Motor Company Australia"),
    ("6F5", "Kenworth Australia"),
    ("6FP", "Ford Motor Company Australia"),
    ("6G1", "General Motors-Holden (post Nov 2002)"),
    ("6G2", "Pontiac Australia (GTO & G8)"),
    ("6H8", "General Motors-Holden (pre Nov 2002)"),
    ("6MM", "Mitsubishi Motors Australia"),
    ("6T1", "Toyota Motor Corporation Australia"),
    ("6U9", "Privately Imported car in Australia"),
    // South America
    ("8AD", "Peugeot Argentina"),
    ("8AF", "Ford Motor Company Argentina"),
    ("8AG", "Chevrolet Argentina"),
    ("8AJ", "Toyota Argentina"),
    ("8AK", "Suzuki Argentina"),
    ("8AP", "Fiat Argentina"),
    ("8AW", "Volkswagen Argentina"),
    ("8A1", "Renault Argentina"),
    ("8GD", "Peugeot Chile"),
    ("8GG", "Chevrolet Chile"),
    ("8LD", "Chevrolet Ecuador"),
    ("935", "Citroën Brazil"),
    ("936", "Peugeot Brazil"),
    ("93H", "Honda Brazil"),
    ("93R", "Toyota Brazil"),
    ("93U", "Audi Brazil"),
    ("93V", "Audi Brazil"),
    ("93X", "Mitsubishi Motors Brazil"),
    ("93Y", "Renault Brazil"),
    ("94D", "Nissan Brazil"),
    ("9BD", "Fiat Brazil"),
    ("9BG", "Chevrolet Brazil"),
    ("9BM", "Mercedes Benz Brazil"),
    ("9BR", "Toyota Brazil"),
    ("9BS", "Scania Brazil"),
    ("9BW", "Volkswagen Brazil"),
    ("9FB", "Renault Colombia"),
];
