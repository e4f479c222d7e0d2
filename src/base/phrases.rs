//! Fixed phrases used by the bot: name lists, joke templates, and canned messages.

/// First names drawn for name jokes.
pub const FIRST_NAMES: &[&str] = &[
    "Bumblebee", "Bandersnatch", "Broccoli", "Rinkydink", "Bombadil", "Boilerdang", "Bandicoot", "Fragglerock",
    "Muffintop", "Congleton", "Blubberdick", "Buffalo", "Benadryl", "Butterfree", "Burberry", "Whippersnatch",
    "Buttermilk", "Beezlebub", "Budapest", "Boilerdang", "Blubberwhale", "Bumberstump", "Bulbasaur", "Cogglesnatch",
    "Liverswort", "Bodybuild", "Johnnycash", "Bendydick", "Burgerking", "Bonaparte", "Bunsenburner", "Billiardball",
    "Bukkake", "Baseballmitt", "Blubberbutt", "Baseballbat", "Rumblesack", "Barister", "Danglerack", "Rinkydink",
    "Bombadil", "Honkytonk", "Billyray", "Bumbleshack", "Snorkeldink", "Anglerfish", "Beetlejuice", "Bedlington",
    "Bandicoot", "Boobytrap", "Blenderdick", "Bentobox", "Anallube", "Pallettown", "Wimbledon", "Buttercup",
    "Blasphemy", "Syphilis", "Snorkeldink", "Brandenburg", "Barbituate", "Snozzlebert", "Tiddleywomp", "Bouillabaisse",
    "Wellington", "Benetton", "Bendandsnap", "Timothy", "Brewery", "Bentobox", "Brandybuck", "Benjamin", "Buckminster",
    "Bourgeoisie", "Bakery", "Oscarbait", "Buckyball", "Bourgeoisie", "Burlington", "Buckingham", "Barnoldswick",
];

/// Last names drawn for name jokes.
pub const LAST_NAMES: &[&str] = &[
    "Coddleswort", "Crumplesack", "Curdlesnoot", "Calldispatch", "Humperdinck", "Rivendell", "Cuttlefish", "Lingerie",
    "Vegemite", "Ampersand", "Cumberbund", "Candycrush", "Clombyclomp", "Cragglethatch", "Nottinghill", "Cabbagepatch",
    "Camouflage", "Creamsicle", "Curdlemilk", "Upperclass", "Frumblesnatch", "Crumplehorn", "Talisman", "Candlestick",
    "Chesterfield", "Bumbersplat", "Scratchnsniff", "Snugglesnatch", "Charizard", "Carrotstick", "Cumbercooch",
    "Crackerjack", "Crucifix", "Cuckatoo", "Cockletit", "Collywog", "Capncrunch", "Covergirl", "Cumbersnatch",
    "Countryside", "Coggleswort", "Splishnsplash", "Copperwire", "Animorph", "Curdledmilk", "Cheddarcheese",
    "Cottagecheese", "Crumplehorn", "Snickersbar", "Banglesnatch", "Stinkyrash", "Cameltoe", "Chickenbroth",
    "Concubine", "Candygram", "Moldyspore", "Chuckecheese", "Cankersore", "Crimpysnitch", "Wafflesmack", "Chowderpants",
    "Toodlesnoot", "Clavichord", "Cuckooclock", "Oxfordshire", "Cumbersome", "Chickenstrips", "Battleship",
    "Commonwealth", "Cunningsnatch", "Custardbath", "Kryptonite", "Curdlesnoot", "Cummerbund", "Coochyrash",
    "Crackerdong", "Crackerdong", "Curdledong", "Crackersprout", "Crumplebutt", "Colonist", "Coochierash",
    "Slapptyback",
];

/// Name joke templates. `{name}` is the full name, `{lastname}` the drawn last name.
pub const NAME_JOKE_TEMPLATES: &[&str] = &[
    "Did you mean {name}?",
    "I think you'll find my name is {name}.",
    "The name's {lastname}. {name}.",
    "My name is {name}. It is my business to know what other people don't know.",
    "If people ask, 'Are you {name}?', it's horribly naff, but I say, 'I'm not, I just look a bit like him'.",
];

/// Canned reply to anything about cake.
pub const CAKE_RESPONSE: &str = "Baker Street!?";

/// Warning posted when Christmas comes up outside of December.
pub const OUT_OF_SEASON_WARNING: &str = ":warning: Out-of-season Christmas mention detected. It is not December yet.";

/// Escalation prompt posted once a message hits the reaction threshold.
pub const ESCALATION_PROMPT: &str = "A message is drawing a lot of reactions. Should it be escalated?";

/// Callback id attached to the escalation prompt buttons.
pub const ESCALATION_CALLBACK_ID: &str = "reaction_escalation";

/// Welcome message posted on startup. `{bot_name}` is the configured bot name.
pub const WELCOME_TEMPLATE: &str =
    "Hi guys! You might know me from such films as The Hobbit and Sherlock Holmes: A Game of Shadows. Just say `Benedict Cumberbatch` or `{bot_name}` to invoke me!";
